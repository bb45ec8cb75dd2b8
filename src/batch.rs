//! Batch orchestration across multiple video files.
//!
//! The controller processes inputs strictly in order, staging each one to
//! temporary storage, scanning it, and recording an outcome before moving on.
//! Matches are reported to the progress layer as they are discovered, not
//! just in the final report. Per-file problems (unopenable video, torn
//! stream) degrade to "not matched"; only staging I/O failures abort the
//! batch.

use std::io::Read;
use std::time::Instant;

use anyhow::{ensure, Result};

use crate::config::ScanConfig;
use crate::decode::QrDecoder;
use crate::display::DisplaySink;
use crate::matches_target;
use crate::scan::FrameScanner;
use crate::staging::StagedVideo;

/// A named video byte stream handed in by the presentation layer.
pub struct VideoInput {
    pub name: String,
    pub reader: Box<dyn Read>,
}

impl VideoInput {
    pub fn new(name: impl Into<String>, reader: Box<dyn Read>) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, Box::new(std::io::Cursor::new(bytes)))
    }
}

/// Verdict for one input video. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub file_name: String,
    pub matched: bool,
    pub matched_payload: Option<String>,
}

/// Final report for one batch run.
#[derive(Clone, Debug)]
pub struct BatchReport {
    /// One outcome per input, in input order.
    pub outcomes: Vec<FileOutcome>,
    pub elapsed_seconds: f64,
    pub any_match: bool,
}

/// Progress callbacks into the presentation layer. Advisory only: callbacks
/// must not influence the scan.
pub trait ProgressReporter {
    /// A file is about to be scanned.
    fn file_started(&mut self, _name: &str) {}
    /// A file was confirmed to contain the target, as soon as it happened.
    fn file_matched(&mut self, _name: &str, _payload: &str) {}
    /// The batch finished.
    fn finished(&mut self, _report: &BatchReport, _target: &str) {}
}

/// Reporter that drops every event. Useful for tests and embedding.
pub struct NullProgress;

impl ProgressReporter for NullProgress {}

/// Runs a scan target against a batch of videos.
pub struct BatchController<'a> {
    decoder: &'a mut dyn QrDecoder,
    display: &'a mut dyn DisplaySink,
    progress: &'a mut dyn ProgressReporter,
}

impl<'a> BatchController<'a> {
    pub fn new(
        decoder: &'a mut dyn QrDecoder,
        display: &'a mut dyn DisplaySink,
        progress: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            decoder,
            display,
            progress,
        }
    }

    /// Scan every input for `target` and produce the batch report.
    ///
    /// Preconditions: a non-empty target and at least one input. Violations
    /// are rejected before any scanning begins.
    pub fn run(
        &mut self,
        inputs: Vec<VideoInput>,
        target: &str,
        config: &ScanConfig,
    ) -> Result<BatchReport> {
        ensure!(
            !target.trim().is_empty(),
            "no search code given; enter the QR code to scan for"
        );
        ensure!(
            !inputs.is_empty(),
            "no video files given; select at least one video to scan"
        );
        config.validate()?;

        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(inputs.len());

        for mut input in inputs {
            self.progress.file_started(&input.name);
            log::info!("scanning video file: {}", input.name);

            let staged = StagedVideo::stage(&input.name, &mut input.reader)?;
            let outcome = FrameScanner::new(&mut *self.decoder, &mut *self.display).scan_path(
                staged.path(),
                target,
                config,
            );
            // Staged copy is deleted here, before the next file.
            drop(staged);

            let matched_payload = outcome
                .matches
                .first()
                .filter(|payload| matches_target(target, payload.as_str()))
                .cloned();
            if let Some(payload) = &matched_payload {
                self.progress.file_matched(&input.name, payload);
                log::info!("{} contains the QR code: {}", input.name, payload);
            } else {
                log::info!(
                    "{}: no match ({} frames read, {} sampled)",
                    input.name,
                    outcome.frames_read,
                    outcome.frames_sampled
                );
            }
            outcomes.push(FileOutcome {
                file_name: input.name,
                matched: matched_payload.is_some(),
                matched_payload,
            });
        }

        let report = BatchReport {
            any_match: outcomes.iter().any(|o| o.matched),
            elapsed_seconds: started.elapsed().as_secs_f64(),
            outcomes,
        };
        self.progress.finished(&report, target);
        Ok(report)
    }
}
