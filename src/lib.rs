//! qrsweep - locate a target QR-encoded identifier in a batch of video files.
//!
//! The scanner decodes frames from each video, searches the decoded QR
//! payloads for an operator-supplied target string, and reports which file(s)
//! contain it. Sampling is lossy by design: only every Nth frame is analyzed,
//! and a file is confirmed once the target is seen in `min_confirmations`
//! sampled frames.
//!
//! # Module Structure
//!
//! - `frame`: RGB frame buffer shared by sources, decoders, and annotation
//! - `source`: video frame sources (synthetic stub, FFmpeg behind `decode-ffmpeg`)
//! - `decode`: QR symbol location and payload decoding (`rqrr` backend)
//! - `annotate`: bounding-box and payload-label overlays on scanned frames
//! - `scan`: per-video scan loop (sampling policy, match tally, early stop)
//! - `staging`: transient on-disk copies of uploaded videos
//! - `batch`: multi-file orchestration, outcomes, and the final report
//! - `display`: live preview sinks for annotated frames
//! - `config`: scan parameters from file and environment
//! - `ui`: terminal progress reporting

pub mod annotate;
pub mod batch;
pub mod config;
pub mod decode;
pub mod display;
pub mod frame;
pub mod scan;
pub mod source;
pub mod staging;
pub mod ui;

pub use batch::{
    BatchController, BatchReport, FileOutcome, NullProgress, ProgressReporter, VideoInput,
};
pub use config::ScanConfig;
pub use decode::{Bounds, Detection, QrDecoder, RqrrDecoder, ScriptedDecoder};
pub use display::{DisplaySink, NullDisplay, PngPreview};
pub use frame::Frame;
pub use scan::{FrameScanner, ScanOutcome};
pub use source::{FrameSource, SyntheticSource, VideoSource};

/// Case-insensitive exact comparison between the scan target and a decoded
/// payload. Empty payloads never match; substrings never match.
pub fn matches_target(target: &str, payload: &str) -> bool {
    if payload.is_empty() {
        return false;
    }
    target.to_lowercase() == payload.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_match_ignores_case() {
        assert!(matches_target("ABC123", "abc123"));
        assert!(matches_target("ABC123", "AbC123"));
        assert!(matches_target("abc123", "ABC123"));
    }

    #[test]
    fn target_match_is_exact_not_substring() {
        assert!(!matches_target("ABC123", "ABC1234"));
        assert!(!matches_target("ABC123", "ABC12"));
        assert!(!matches_target("ABC123", "xABC123"));
    }

    #[test]
    fn empty_payload_never_matches() {
        assert!(!matches_target("", ""));
        assert!(!matches_target("ABC123", ""));
    }
}
