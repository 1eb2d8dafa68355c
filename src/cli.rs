//! Command-line interface.
//!
//! `serve` runs the HTTP server; `migrate` applies pending database
//! migrations and exits. Global flags select the configuration file or
//! environment before anything is loaded.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigLoader, Environment, Settings};
use crate::db::run_pending_migrations;
use crate::server::Server;

/// A cars-and-users registry API server
#[derive(Parser, Debug)]
#[command(name = "fleet-rs")]
#[command(about = "A cars-and-users registry API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to load instead of the layered config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection (development, test, production)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Raise log output to debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Loads settings honoring the `--config`, `--env`, and `--verbose`
    /// flags.
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let loader = match &self.config {
            Some(file) => ConfigLoader::with_config_file(file),
            None => {
                if let Some(env) = self.env {
                    // SAFETY: called once at startup, before any threads spawn.
                    unsafe { std::env::set_var(Environment::ENV_VAR, env.as_str()) };
                }
                ConfigLoader::new()?
            }
        };

        let mut settings = loader.load()?;
        if self.verbose {
            settings.logger.level = "debug".to_string();
        }
        Ok(settings)
    }

    /// Dispatches the selected subcommand.
    pub async fn execute(self, settings: Settings) -> anyhow::Result<()> {
        match self.command.unwrap_or(Commands::Serve) {
            Commands::Serve => Server::new(settings).run().await,
            Commands::Migrate => {
                let applied = run_pending_migrations(&settings.database.url).await?;
                tracing::info!(applied, "Migrations complete");
                println!("Applied {applied} migration(s)");
                Ok(())
            }
        }
    }
}
