use std::process::ExitCode;

use clap::Parser;

use infalens_cli::commands::{self, Cli, Commands};
use infalens_core::errors::InfalensErrorCode;
use infalens_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Kinds => {
            commands::run_kinds();
            ExitCode::SUCCESS
        }
        Commands::Extract(args) => match commands::run_extract(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e.boundary_string());
                ExitCode::from(commands::exit_code_for(&e))
            }
        },
    }
}
