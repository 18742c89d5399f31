//! CLI commands and arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use infalens_core::config::{CliOverrides, InfalensConfig};
use infalens_core::errors::{error_code, AppError, InfalensErrorCode, ReportError};
use infalens_core::types::TransformationKind;
use infalens_extract::extract_from_bytes_with_kinds;
use infalens_report::reporters::xlsx::DEFAULT_XLSX_FILENAME;
use infalens_report::{create_reporter, LogicTable, ReportOutput};

#[derive(Parser, Debug)]
#[command(
    name = "infalens",
    about = "Extract transformation logic from Informatica mapping exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract logic records from a mapping export XML file
    Extract(ExtractArgs),

    /// List the recognized transformation kinds in priority order
    Kinds,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the mapping export XML file
    pub input: PathBuf,

    /// Output format (console, json, xlsx)
    #[arg(long)]
    pub format: Option<String>,

    /// Output path; text formats default to stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Restrict extraction to these kinds, by TYPE spelling
    #[arg(long, value_delimiter = ',')]
    pub kinds: Vec<String>,
}

/// Run the `extract` command.
///
/// An empty result is a notice on stderr and a success exit, matching the
/// review workflow: an export with no embedded logic is unusual but valid.
pub fn run_extract(args: &ExtractArgs) -> Result<(), AppError> {
    let overrides = CliOverrides {
        kinds: if args.kinds.is_empty() {
            None
        } else {
            Some(args.kinds.clone())
        },
        format: args.format.clone(),
        output: args.output.clone(),
    };
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = InfalensConfig::load(&root, Some(&overrides))?;

    let bytes = std::fs::read(&args.input).map_err(|source| AppError::ReadInput {
        path: args.input.clone(),
        source,
    })?;

    let kinds = config.extract.effective_kinds();
    let records = extract_from_bytes_with_kinds(&bytes, &kinds)?;

    if records.is_empty() {
        eprintln!(
            "warning: no logic records found in {}",
            args.input.display()
        );
        return Ok(());
    }
    info!(records = records.len(), "extraction complete");

    let format = config.report.effective_format().to_string();
    let reporter = create_reporter(&format).ok_or(ReportError::UnknownFormat {
        format: format.clone(),
    })?;
    let table = LogicTable::from_records(&records);
    let output = reporter.generate(&table)?;

    match (output, config.report.output) {
        (ReportOutput::Text(text), None) => print!("{text}"),
        (ReportOutput::Text(text), Some(path)) => write_output(&path, text.as_bytes())?,
        (ReportOutput::Binary(bytes), path) => {
            // Binary formats always go to a file; fall back to the
            // standard download filename in the working directory.
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_XLSX_FILENAME));
            write_output(&path, &bytes)?;
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(())
}

/// Run the `kinds` command.
pub fn run_kinds() {
    for kind in TransformationKind::all() {
        println!("{}", kind.name());
    }
}

/// Map an application error to a process exit status.
pub fn exit_code_for(error: &AppError) -> u8 {
    match error.error_code() {
        error_code::DOCUMENT_ERROR => 2,
        error_code::CONFIG_ERROR => 3,
        error_code::REPORT_ERROR | error_code::UNKNOWN_FORMAT => 4,
        error_code::IO_ERROR => 5,
        _ => 1,
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, bytes).map_err(|source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
