//! Video frame sources.
//!
//! `VideoSource::open` resolves a staged video file to a decoding backend:
//!
//! - Files beginning with the `qrsweep-stub:` marker open a deterministic
//!   synthetic source (tests, demos).
//! - Real container files (MPEG-4) require the `decode-ffmpeg` feature and
//!   open an FFmpeg-backed decoder.
//!
//! Sources produce `Frame` instances with 1-based ordinals. A source is
//! released when dropped; callers never manage the underlying handle.

#[cfg(feature = "decode-ffmpeg")]
mod ffmpeg;
mod synthetic;

#[cfg(feature = "decode-ffmpeg")]
pub(crate) use ffmpeg::FfmpegSource;
pub use synthetic::SyntheticSource;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::frame::Frame;

/// Marker prefix for synthetic stub videos: `qrsweep-stub:<frame-count>`.
pub const STUB_MAGIC: &[u8] = b"qrsweep-stub:";

/// A source of decoded video frames.
pub trait FrameSource {
    /// Pull the next frame. `Ok(None)` signals end of stream.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// An opened video, dispatching to the backend selected at open time.
pub struct VideoSource {
    backend: Backend,
}

enum Backend {
    Synthetic(SyntheticSource),
    #[cfg(feature = "decode-ffmpeg")]
    Ffmpeg(FfmpegSource),
}

impl VideoSource {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("failed to open video file {}", path.display()))?;
        let mut header = [0u8; 64];
        let read = file
            .read(&mut header)
            .with_context(|| format!("failed to read video file {}", path.display()))?;

        if header[..read].starts_with(STUB_MAGIC) {
            let frames = parse_stub_frame_count(&header[STUB_MAGIC.len()..read]);
            log::info!(
                "VideoSource: opened {} (synthetic, {} frames)",
                path.display(),
                frames
            );
            return Ok(Self {
                backend: Backend::Synthetic(SyntheticSource::new(frames)),
            });
        }

        #[cfg(feature = "decode-ffmpeg")]
        {
            let source = FfmpegSource::open(path)?;
            log::info!("VideoSource: opened {} (ffmpeg)", path.display());
            Ok(Self {
                backend: Backend::Ffmpeg(source),
            })
        }
        #[cfg(not(feature = "decode-ffmpeg"))]
        {
            anyhow::bail!(
                "cannot open {}: decoding video containers requires the decode-ffmpeg feature",
                path.display()
            )
        }
    }
}

impl FrameSource for VideoSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        match &mut self.backend {
            Backend::Synthetic(source) => source.next_frame(),
            #[cfg(feature = "decode-ffmpeg")]
            Backend::Ffmpeg(source) => source.next_frame(),
        }
    }
}

fn parse_stub_frame_count(rest: &[u8]) -> u64 {
    let text = std::str::from_utf8(rest).unwrap_or("");
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(SyntheticSource::DEFAULT_FRAMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn stub_marker_selects_synthetic_backend() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"qrsweep-stub:5").unwrap();
        file.flush().unwrap();

        let mut source = VideoSource::open(file.path()).unwrap();
        let mut count = 0u64;
        while let Some(frame) = source.next_frame().unwrap() {
            count += 1;
            assert_eq!(frame.index, count);
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn stub_marker_without_count_uses_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"qrsweep-stub:").unwrap();
        file.flush().unwrap();

        let mut source = VideoSource::open(file.path()).unwrap();
        let mut count = 0u64;
        while source.next_frame().unwrap().is_some() {
            count += 1;
        }
        assert_eq!(count, SyntheticSource::DEFAULT_FRAMES);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        assert!(VideoSource::open(Path::new("/nonexistent/video.mp4")).is_err());
    }
}
