//! Command implementations for the launch records CLI.
//!
//! Provides subcommands for downloading the published launch dashboard
//! dataset and printing per-site statistics from it.

use clap::Subcommand;

pub mod fetch;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download the published launch dashboard dataset
    Fetch {
        /// Output path for the launches CSV
        #[arg(short = 'o', long, default_value = "fixtures/launches.csv")]
        output: String,
    },

    /// Print per-site launch statistics from a launches CSV
    Summary {
        /// Path to a launches CSV (defaults to the embedded dataset)
        #[arg(short = 'l', long)]
        launches_csv: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output } => fetch::run_fetch(&output).await,
        Command::Summary { launches_csv } => summary::run_summary(launches_csv.as_deref()),
    }
}
