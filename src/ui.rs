//! Terminal progress reporting.
//!
//! One spinner stage per video file on a TTY, plain `==>` lines otherwise.
//! Match announcements are printed the moment a file is confirmed; the batch
//! summary (elapsed time, "not found" notice) prints at the end.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

use crate::batch::{BatchReport, ProgressReporter};

#[derive(Clone, Copy, Debug)]
pub enum UiMode {
    Auto,
    Plain,
    Pretty,
}

#[derive(Clone, Debug)]
pub struct Ui {
    mode: UiMode,
    is_tty: bool,
}

impl Ui {
    pub fn new(mode: UiMode, is_tty: bool) -> Self {
        Self { mode, is_tty }
    }

    pub fn from_flag(ui_flag: Option<&str>, is_tty: bool) -> Self {
        let mode = match ui_flag {
            Some("plain") => UiMode::Plain,
            Some("pretty") => UiMode::Pretty,
            _ => UiMode::Auto,
        };
        Self::new(mode, is_tty)
    }

    fn stage(&self, name: &str) -> StageGuard {
        let use_pretty = match self.mode {
            UiMode::Pretty => true,
            UiMode::Auto => self.is_tty,
            UiMode::Plain => false,
        };

        if use_pretty {
            let spinner = ProgressBar::new_spinner();
            spinner.set_draw_target(ProgressDrawTarget::stderr());
            spinner.enable_steady_tick(Duration::from_millis(120));
            let style = ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            spinner.set_style(style);
            spinner.set_message(format!("{name}…"));
            StageGuard::new(name.to_string(), Some(spinner))
        } else {
            eprintln!("==> {}", name);
            StageGuard::new(name.to_string(), None)
        }
    }
}

struct StageGuard {
    name: String,
    start: Instant,
    spinner: Option<ProgressBar>,
}

impl StageGuard {
    fn new(name: String, spinner: Option<ProgressBar>) -> Self {
        Self {
            name,
            start: Instant::now(),
            spinner,
        }
    }

    /// Print a line without disturbing an active spinner.
    fn note(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.println(message);
        } else {
            println!("{message}");
        }
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let message = format!("✔ {} ({})", self.name, format_duration(elapsed));
        if let Some(spinner) = &self.spinner {
            spinner.finish_with_message(message);
        } else {
            eprintln!("{message}");
        }
    }
}

/// Batch progress printed to the operator's terminal.
pub struct ConsoleReporter {
    ui: Ui,
    current: Option<StageGuard>,
}

impl ConsoleReporter {
    pub fn new(ui: Ui) -> Self {
        Self { ui, current: None }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn file_started(&mut self, name: &str) {
        // Dropping the previous guard finishes its stage line.
        self.current = Some(self.ui.stage(&format!("Scanning video file: {name}")));
    }

    fn file_matched(&mut self, name: &str, payload: &str) {
        let line = format!("{name} contains the QR code: {payload}");
        match &self.current {
            Some(stage) => stage.note(&line),
            None => println!("{line}"),
        }
    }

    fn finished(&mut self, report: &BatchReport, target: &str) {
        self.current = None;
        if !report.any_match {
            println!("QR code \"{target}\" was not found in any of the scanned files.");
        }
        println!(
            "Scanned {} file(s) in {:.2}s.",
            report.outcomes.len(),
            report.elapsed_seconds
        );
    }
}

fn format_duration(duration: Duration) -> String {
    if duration.as_secs() >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_format_by_magnitude() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }
}
