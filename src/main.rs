use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use piocheck::cli::{self, Format};

/// Structural checker for PIO state machine assembly
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate PIO source files (stdin when none, or `-`, is given)
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Source files to validate
        files: Vec<PathBuf>,
    },
    /// List the recognized opcodes and the instruction limit
    Opcodes,
}

fn main() -> Result<ExitCode> {
    let env = env_logger::Env::default()
        .filter_or("PIOCHECK_LOG", "warn")
        .write_style_or("PIOCHECK_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();

    match args.command {
        Command::Check { format, files } => {
            let valid = cli::check(&files, format).context("validation failed")?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Opcodes => {
            cli::list_opcodes();
            Ok(ExitCode::SUCCESS)
        }
    }
}
