use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use numstat::error::StatsError;
use numstat::{run, RunOptions};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "compute_statistics",
    version,
    about = "Compute descriptive statistics from a file with one number per line"
)]
struct Args {
    /// File with one number per line
    #[arg(allow_hyphen_values = true)]
    input_file: PathBuf,
}

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    // Scoped to this run; dropped when main returns.
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("Computing statistics from a file");

        let args = match Args::try_parse() {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            Err(_) => {
                tracing::info!("{}", Args::command().render_usage());
                return ExitCode::from(1);
            }
        };

        match run(&RunOptions::new(args.input_file)) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                match &e {
                    StatsError::NotFound { .. } => tracing::warn!("Error: {e}"),
                    StatsError::NoValidData { .. } => {
                        tracing::warn!("Error: No valid numbers found in the file.")
                    }
                    _ => tracing::error!("Error: {e}"),
                }
                ExitCode::from(e.exit_code())
            }
        }
    })
}
