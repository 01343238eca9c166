//! Moodring - kid-safe text mood detector.
//!
//! This is the main binary. Three modes:
//! - interactive prompt (default): type a sentence, get an emoji + message
//! - one-shot: pass the text as an argument
//! - `--serve`: run the HTTP API server for browser front-ends

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use moodring_core::{MoodPredictor, MoodReport, Severity};
use moodring_server::{Server, ServerConfig};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Moodring - kid-safe text mood detector
#[derive(Parser, Debug)]
#[command(name = "moodring", version, about)]
struct Args {
    /// Text to classify once; omit for the interactive prompt
    text: Option<String>,

    /// Run the HTTP API server instead of the interactive prompt
    #[arg(long)]
    serve: bool,

    /// Port for the API server
    #[arg(long, default_value_t = moodring_server::DEFAULT_PORT)]
    port: u16,

    /// Skip the trained classifiers (rules and polarity fallback only)
    #[arg(long)]
    no_ml: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "moodring", "Moodring").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moodring={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("moodring")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                // Server and debug runs log to console too; the
                // interactive prompt keeps its output clean and logs to
                // file only.
                if args.debug || args.serve {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(std::io::stdout))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                }

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    // Fallback: console logging only
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

/// Renders a report with severity-appropriate ANSI styling.
fn render(report: &MoodReport) -> String {
    let line = format!("{} {}", report.outcome.emoji(), report.outcome.message());
    match report.outcome.severity() {
        Severity::Alert => format!("\x1b[1;31m{}\x1b[0m", line),
        Severity::Warning => format!("\x1b[33m{}\x1b[0m", line),
        Severity::Info => format!("\x1b[36m{}\x1b[0m", line),
        Severity::Plain => line,
    }
}

/// Runs the interactive prompt until EOF or "quit".
fn run_prompt(mut predictor: MoodPredictor) -> anyhow::Result<()> {
    println!("Moodring - type a short sentence and I'll guess the mood.");
    println!("(press Ctrl-D or type \"quit\" to leave)");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            println!("Please type something first.");
            continue;
        }

        let report = predictor.predict(input);
        tracing::debug!(stage = ?report.stage, duration_us = report.duration_us, "prediction");
        println!("{}", render(&report));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the guard alive for the duration of the program
    let _log_guard = init_logging(&args);

    tracing::info!("Starting Moodring...");

    let predictor = if args.no_ml {
        MoodPredictor::rules_only()
    } else {
        MoodPredictor::with_defaults()
    };
    tracing::info!(
        emotion_model = predictor.has_emotion_model(),
        sentiment_model = predictor.has_sentiment_model(),
        "Predictor ready"
    );

    if args.serve {
        let config = ServerConfig::default().with_port(args.port);
        let server = Server::with_predictor(config, predictor)
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        server
            .run()
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
        return Ok(());
    }

    if let Some(text) = args.text {
        let mut predictor = predictor;
        if text.trim().is_empty() {
            println!("Please type something first.");
            return Ok(());
        }
        let report = predictor.predict(&text);
        println!("{}", render(&report));
        return Ok(());
    }

    run_prompt(predictor)?;

    tracing::info!("Moodring shutting down");
    Ok(())
}
