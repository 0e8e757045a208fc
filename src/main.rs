use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use contact_extractor::error::ExtractError;
use contact_extractor::settings::Settings;
use contact_extractor::{parser, sink, source};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "contact_extractor",
    about = "Extract structured contact data from PDF or DOCX into a CSV"
)]
struct Cli {
    /// Path to the PDF or DOCX file
    filepath: PathBuf,
    /// Directory the CSV is written to (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Output file name prefix (default: "output")
    #[arg(short, long)]
    base_name: Option<String>,
    /// TOML file with `output_dir` and/or `base_name`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = run(&cli);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, ok = result.is_ok(), "run finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::load(
        cli.config.as_deref(),
        cli.output_dir.as_deref(),
        cli.base_name.as_deref(),
    )?;

    let kind = source::detect(&cli.filepath)?;
    println!("{} file detected. Ready for extraction.", kind.label());

    let lines = source::read_lines(&cli.filepath, kind)?;
    let records = parser::segment(&lines);
    info!(lines = lines.len(), records = records.len(), "segmented document");

    if records.is_empty() {
        return Err(ExtractError::NoEntriesFound.into());
    }

    let path = sink::write_records_to_csv(&records, &settings.output_dir, &settings.base_name)
        .with_context(|| format!("could not save results in {}", settings.output_dir.display()))?;
    println!("Extracted {} entries and saved to: {}", records.len(), path.display());
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ExtractError>() {
        Some(ExtractError::NoEntriesFound) => eprintln!("No entries found in the document."),
        Some(ExtractError::FileNotFound(_)) => eprintln!("File does not exist."),
        Some(ExtractError::UnsupportedFileType(_)) => {
            eprintln!("Unsupported file type. Use .docx or .pdf")
        }
        _ => eprintln!("Error: {err:#}"),
    }
}
