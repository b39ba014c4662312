pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{Period, PredictionRequest};
use crate::providers::{MfApiProvider, PredictionClient};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Funds {
        house: String,
    },
    Candles {
        house: String,
        scheme: Option<u32>,
        period: Period,
        seed: Option<u64>,
    },
    Predict(PredictionRequest),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("navcandle starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Funds { house } => {
            let provider = MfApiProvider::new(&config.providers.mfapi.base_url)?;
            cli::funds::run(&provider, &provider, &house).await
        }
        AppCommand::Candles {
            house,
            scheme,
            period,
            seed,
        } => {
            let provider = MfApiProvider::new(&config.providers.mfapi.base_url)?;
            cli::candles::run(&provider, &provider, &house, scheme, period, seed).await
        }
        AppCommand::Predict(request) => {
            let client = PredictionClient::new(&config.providers.prediction.base_url)?;
            cli::predict::run(&client, &request).await
        }
    }
}
