//! River Watch CLI - query Environment Agency river level data from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rw-cli",
    version,
    about = "UK river level monitoring toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: rw_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rw_cmd::run(cli.command).await
}
