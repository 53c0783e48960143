use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub mod commands;

use crate::config::load_settings;
use commands::{check, forecast, serve};

#[derive(Parser)]
#[command(name = "priceforecast")]
#[command(about = "Price forecast dashboard host and command line client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard and relay `/predict/` to the prediction backend
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "PRICEFORECAST_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Base URL of the prediction backend (e.g., http://127.0.0.1:8000)
        #[arg(short = 'u', long, env = "PRICEFORECAST_BACKEND_URL")]
        backend_url: Option<String>,

        /// Directory with the built dashboard (trunk's `dist`)
        #[arg(short, long, env = "PRICEFORECAST_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Wait until the prediction endpoint answers with JSON
    ///
    /// Exits with an error after the last failed attempt.
    Check {
        /// Full URL of the prediction endpoint
        #[arg(long, default_value = "http://127.0.0.1:8000/predict/")]
        url: String,

        /// Number of attempts
        #[arg(long, default_value_t = 8)]
        attempts: u32,

        /// Timeout of each attempt, in seconds
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,

        /// Pause between attempts, in seconds
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,
    },
    /// Fetch a forecast and print it
    ///
    /// Without options prints the twelve-month forecast. With `--month`
    /// prints the prediction for that month instead.
    Forecast {
        /// Base URL of the prediction backend
        #[arg(short = 'u', long, env = "PRICEFORECAST_BACKEND_URL")]
        backend_url: Option<String>,

        /// Month to predict (YYYY-MM)
        #[arg(short, long, conflicts_with = "csv")]
        month: Option<String>,

        /// CSV price history to forecast from
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = load_settings()?;

        match self.command {
            Commands::Serve { bind_address, backend_url, static_dir } => {
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(backend_url) = backend_url {
                    settings.backend_url = backend_url;
                }
                if let Some(static_dir) = static_dir {
                    settings.static_dir = static_dir;
                }
                serve(&settings).await?;
            }
            Commands::Check { url, attempts, timeout_secs, interval_secs } => {
                check(
                    &url,
                    attempts,
                    Duration::from_secs(timeout_secs),
                    Duration::from_secs(interval_secs),
                )
                .await?;
            }
            Commands::Forecast { backend_url, month, csv } => {
                let backend_url = backend_url.unwrap_or(settings.backend_url.clone());
                forecast(
                    &backend_url,
                    month.as_deref(),
                    csv.as_deref(),
                    settings.request_timeout(),
                )
                .await?;
            }
        }
        Ok(())
    }
}
