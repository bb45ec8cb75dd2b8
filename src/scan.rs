//! Per-video scan loop.
//!
//! The scanner pulls frames from a source, analyzes every Nth frame (the
//! sample interval), annotates detections, and tallies sampled frames whose
//! decoded payload equals the scan target (case-insensitive). A video is
//! confirmed once the tally reaches `min_confirmations`: scanning stops early
//! and only the last matched payload is returned. Reaching end of stream
//! first yields an empty result, even if one or two matches were seen - a
//! deliberate confidence/throughput trade-off inherited from the sampling
//! policy.
//!
//! The tally is scoped to one video; nothing carries over between calls.

use std::path::Path;

use crate::annotate::{self, Style};
use crate::config::ScanConfig;
use crate::decode::QrDecoder;
use crate::display::DisplaySink;
use crate::matches_target;
use crate::source::{FrameSource, VideoSource};

/// Result of scanning one video.
#[derive(Clone, Debug, Default)]
pub struct ScanOutcome {
    /// Matched payloads. Empty when the video was not confirmed; exactly one
    /// entry (the last match seen) when it was.
    pub matches: Vec<String>,
    pub frames_read: u64,
    pub frames_sampled: u64,
}

impl ScanOutcome {
    pub fn confirmed(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Drives one decoder and one display sink across videos.
pub struct FrameScanner<'a> {
    decoder: &'a mut dyn QrDecoder,
    display: &'a mut dyn DisplaySink,
}

impl<'a> FrameScanner<'a> {
    pub fn new(decoder: &'a mut dyn QrDecoder, display: &'a mut dyn DisplaySink) -> Self {
        Self { decoder, display }
    }

    /// Open `path` and scan it. An unopenable video is not a hard failure:
    /// it logs a warning and yields an empty outcome so a batch can continue
    /// with its next file.
    pub fn scan_path(&mut self, path: &Path, target: &str, config: &ScanConfig) -> ScanOutcome {
        match VideoSource::open(path) {
            Ok(mut source) => self.scan_source(&mut source, target, config),
            Err(e) => {
                log::warn!("skipping unreadable video: {:#}", e);
                ScanOutcome::default()
            }
        }
        // The capture handle is dropped here on every path, early stop and
        // read errors included.
    }

    /// Scan an already-open source until confirmation or end of stream.
    pub fn scan_source(
        &mut self,
        source: &mut dyn FrameSource,
        target: &str,
        config: &ScanConfig,
    ) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let mut tally = 0u32;
        let mut last_match: Option<String> = None;
        // Monotonic frame counter, starting at 1 for the first frame.
        let mut counter = 0u64;

        loop {
            let mut frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    // Absorbed: a torn stream reads as "no more frames".
                    log::warn!("frame read failed, ending scan: {:#}", e);
                    break;
                }
            };
            counter += 1;
            outcome.frames_read += 1;

            // Sampling policy: only counters evenly divisible by the
            // interval are decoded; everything else is discarded.
            if counter % config.sample_interval as u64 != 0 {
                continue;
            }
            outcome.frames_sampled += 1;

            for detection in self.decoder.detect(&frame) {
                if detection.payload.is_empty() {
                    continue;
                }
                let matched = matches_target(target, &detection.payload);
                let style = if matched {
                    Style::Matched
                } else {
                    Style::Unmatched
                };
                annotate::draw_detection(&mut frame, &detection, style);
                if matched {
                    tally += 1;
                    last_match = Some(detection.payload);
                }
            }

            // Every sampled frame reaches the display, matched or not.
            self.display.show(&frame);

            if tally >= config.min_confirmations {
                log::info!(
                    "confirmed after {} matching frames ({} read)",
                    tally,
                    outcome.frames_read
                );
                outcome.matches = last_match.into_iter().collect();
                return outcome;
            }
        }

        outcome
    }
}
