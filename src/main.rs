use anyhow::{Context, Result};
use clap::Parser;
use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, Level};

use docsynth::format::{render_console, render_file};
use docsynth::output::{generate_output_path, read_document, validate_input_path, write_atomic, RunStats};
use docsynth::{RuleBasedPipeline, Summarizer, SummaryConfig, SummaryError};

#[derive(Parser, Debug)]
#[command(name = "docsynth")]
#[command(about = "Extractive summarizer: ranks sentences with LexRank and keeps the most central ones")]
#[command(version)]
struct Args {
    /// Plain-text (.txt) document to summarize
    filepath: PathBuf,

    /// Fraction of sentences to keep, strictly between 0 and 1
    #[arg(long = "compression_ratio", default_value_t = 0.3, allow_negative_numbers = true)]
    compression_ratio: f64,

    /// Minimum number of sentences in the summary
    #[arg(long = "min_sentences", default_value_t = 5, allow_negative_numbers = true)]
    min_sentences: i64,

    /// Stop-word language (English name or ISO 639-1 code)
    #[arg(long, default_value = "english")]
    language: String,

    /// Write JSON run statistics to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Debug-level logs on stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let interrupt = match interrupt_listener() {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("\nAn unexpected error occurred: failed to install interrupt handler: {err}");
            std::process::exit(1);
        }
    };
    debug!("Listening for interrupts");

    let phase = Arc::new(Phase::default());
    let worker_phase = Arc::clone(&phase);
    let mut task = tokio::task::spawn_blocking(move || run(&args, &worker_phase));

    let finished = tokio::select! {
        joined = &mut task => Some(joined),
        _ = interrupt => None,
    };

    // The blocking task cannot be aborted, so exit straight from here
    // instead of waiting for runtime shutdown.
    let code = match finished {
        Some(Ok(Ok(()))) => 0,
        Some(Ok(Err(err))) => report(&err),
        Some(Err(join_err)) => {
            error!(error = %join_err, "Summarization task failed");
            eprintln!("\nAn unexpected error occurred: {join_err}");
            1
        }
        None => {
            if !phase.cancel() {
                debug!("Interrupted while writing output, waiting for the write to finish");
                let _ = task.await;
            }
            println!("\nOperation cancelled by user.");
            0
        }
    };
    std::process::exit(code);
}

const RUNNING: u8 = 0;
const WRITING: u8 = 1;
const CANCELLED: u8 = 2;

/// Run state shared by the worker and the interrupt handler.
/// Output files are touched only after a successful `begin_writing`.
#[derive(Default)]
struct Phase(AtomicU8);

impl Phase {
    fn begin_writing(&self) -> bool {
        self.0
            .compare_exchange(RUNNING, WRITING, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// False when output writing already started and must run to completion
    fn cancel(&self) -> bool {
        self.0
            .compare_exchange(RUNNING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Register for SIGINT / Ctrl-C right away so no interrupt is missed once
/// this returns
#[cfg(unix)]
fn interrupt_listener() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};
    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        sigint.recv().await;
    })
}

#[cfg(not(unix))]
fn interrupt_listener() -> std::io::Result<impl Future<Output = ()>> {
    Ok(async {
        let _ = tokio::signal::ctrl_c().await;
    })
}

/// Print a one-line message and pick the exit code
fn report(err: &anyhow::Error) -> i32 {
    error!("Run failed: {err:#}");
    match err.downcast_ref::<SummaryError>() {
        Some(summary_err) if summary_err.is_validation() => eprintln!("Error: {summary_err}"),
        _ => eprintln!("\nAn unexpected error occurred: {err}"),
    }
    1
}

fn run(args: &Args, phase: &Phase) -> Result<()> {
    validate_input_path(&args.filepath)?;
    if args.min_sentences < 1 {
        return Err(SummaryError::invalid_input("Minimum sentences must be at least 1").into());
    }
    let config = SummaryConfig::default()
        .with_compression_ratio(args.compression_ratio)
        .with_min_sentences(usize::try_from(args.min_sentences).unwrap_or(usize::MAX))
        .with_language(args.language.as_str());
    config.validate()?;

    let pipeline = RuleBasedPipeline::with_default_rules()?;
    let summarizer = Summarizer::new(pipeline, config)?;

    let document = read_document(&args.filepath)?;
    debug!(bytes = document.len(), "Document loaded");

    let started = Instant::now();
    let summary = summarizer.summarize(&document)?;
    let elapsed = started.elapsed();
    println!("Summary generated in {:.2} seconds.", elapsed.as_secs_f64());

    let sections = summarizer.sections(&summary);
    println!("\nSummary:");
    print!("{}", render_console(&sections));

    if !phase.begin_writing() {
        debug!("Cancelled before writing output");
        return Ok(());
    }
    let output_path = generate_output_path(&args.filepath);
    write_atomic(&output_path, &render_file(&sections))?;
    println!("\nSaved to: {}", output_path.display());

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats::from_summary(
            &args.filepath,
            &output_path,
            &summary,
            elapsed.as_millis() as u64,
        );
        stats
            .write(stats_path)
            .with_context(|| format!("Failed to write stats to {}", stats_path.display()))?;
        info!(path = %stats_path.display(), "Wrote run statistics");
    }

    info!(
        sentences = summary.total_sentences(),
        selected = summary.selection.len(),
        "Summary complete"
    );
    Ok(())
}
