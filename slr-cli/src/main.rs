//! Launch records CLI - fetch and inspect the launch dashboard dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slr-cli",
    version,
    about = "SpaceX launch records toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: slr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    slr_cmd::run(cli.command).await
}
