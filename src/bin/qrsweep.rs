//! qrsweep - scan a batch of video files for a target QR code.
//!
//! Each video is staged to temporary storage, sampled frame by frame, and
//! confirmed once the target payload has been decoded in enough sampled
//! frames. Results print as they are found; a summary follows at the end.

use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use qrsweep::ui::{ConsoleReporter, Ui};
use qrsweep::{
    BatchController, DisplaySink, NullDisplay, PngPreview, RqrrDecoder, ScanConfig, VideoInput,
};

#[derive(Parser, Debug)]
#[command(name = "qrsweep", about = "Scan video files for a target QR code")]
struct Args {
    /// QR payload to search for (case-insensitive exact match)
    #[arg(short, long, env = "QRSWEEP_TARGET")]
    target: String,

    /// Analyze every Nth frame (1-60); overrides config
    #[arg(long)]
    interval: Option<u32>,

    /// Sampled-frame matches required to confirm a file; overrides config
    #[arg(long)]
    confirmations: Option<u32>,

    /// Continuously write the latest annotated frame to this PNG path
    #[arg(long)]
    preview: Option<PathBuf>,

    /// UI mode: auto, plain, or pretty
    #[arg(long)]
    ui: Option<String>,

    /// Video files to scan (MP4)
    #[arg(required = true)]
    videos: Vec<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        // Operators get a plain notice, never a backtrace.
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = ScanConfig::load()?;
    if let Some(interval) = args.interval {
        config.sample_interval = interval;
    }
    if let Some(confirmations) = args.confirmations {
        config.min_confirmations = confirmations;
    }
    config.validate()?;

    let mut inputs = Vec::with_capacity(args.videos.len());
    for path in &args.videos {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)
            .with_context(|| format!("failed to open video file {}", path.display()))?;
        inputs.push(VideoInput::new(name, Box::new(file)));
    }

    let mut decoder = RqrrDecoder::new();
    let mut display: Box<dyn DisplaySink> = match args.preview {
        Some(path) => Box::new(PngPreview::new(path)),
        None => Box::new(NullDisplay),
    };
    let ui = Ui::from_flag(args.ui.as_deref(), std::io::stderr().is_terminal());
    let mut progress = ConsoleReporter::new(ui);

    let mut controller = BatchController::new(&mut decoder, &mut *display, &mut progress);
    let report = controller.run(inputs, &args.target, &config)?;

    log::info!(
        "batch finished: {}/{} file(s) matched in {:.2}s",
        report.outcomes.iter().filter(|o| o.matched).count(),
        report.outcomes.len(),
        report.elapsed_seconds
    );
    Ok(())
}
