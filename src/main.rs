use clap::Parser;

use fleet_rs::cli::Cli;
use fleet_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;
    init_logger(&settings.logger)?;

    cli.execute(settings).await
}
