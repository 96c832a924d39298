//! RFP analyzer command-line front end
//!
//! Reads one document, runs the analysis and prints a text report or JSON.

mod config;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use rfp_engine::RfpEngine;
use rfp_reader::ReaderRouter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LoggingConfig, OutputFormat};

/// Largest accepted upload
const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "rfp-cli")]
#[command(
    version,
    about = "Extract sections, questions, requirements and key facts from RFP documents"
)]
struct Args {
    /// Document to analyze
    file: PathBuf,

    /// Format tag (pdf or docx); inferred from the file extension when omitted
    #[arg(long)]
    file_type: Option<String>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// TOML config file (falls back to $RFP_ANALYZER_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    init_tracing(&config.logging, args.verbose)?;
    tracing::debug!(?config, "Loaded configuration");

    let file_type = match args.file_type {
        Some(tag) => tag,
        None => infer_file_type(&args.file)?,
    };
    let bytes = read_document(&args.file)?;

    let result = RfpEngine::new()
        .analyze(&ReaderRouter::new(), &bytes, &file_type)
        .with_context(|| format!("Failed to analyze {}", args.file.display()))?;
    tracing::info!(
        questions = result.questions.len(),
        requirements = result.requirements.len(),
        "Analyzed {}",
        args.file.display()
    );

    let rendered = match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => report::render_text(&display_name(&args.file), &result),
        OutputFormat::Json => report::render_json(&result, args.pretty || config.output.pretty)?,
    };
    println!("{}", rendered);

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays parseable
fn init_tracing(logging: &LoggingConfig, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        logging
            .level
            .parse()
            .with_context(|| format!("Invalid log level: {}", logging.level))?
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Lowercased extension; unknown extensions are passed through and rejected by the analyzer
fn infer_file_type(path: &Path) -> anyhow::Result<String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => Ok(ext.to_ascii_lowercase()),
        None => bail!(
            "Cannot infer the file type of {}; pass --file-type pdf or --file-type docx",
            path.display()
        ),
    }
}

fn read_document(path: &Path) -> anyhow::Result<Vec<u8>> {
    let size = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if size > MAX_FILE_BYTES {
        bail!(
            "{} is {:.2} MB; the maximum file size is 50 MB",
            path.display(),
            size as f64 / 1024.0 / 1024.0
        );
    }

    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
