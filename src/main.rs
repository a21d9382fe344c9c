use std::process::ExitCode;
use std::sync::Arc;

use serenity::client::ClientBuilder;
use serenity::http::HttpBuilder;
use serenity::model::gateway::GatewayIntents;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lostark_market_bot::AppState;
use lostark_market_bot::config::{BotConfig, ConfigError};
use lostark_market_bot::handler::Handler;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build the market HTTP client: {0}")]
    MarketClient(#[from] reqwest::Error),
    #[error("discord client error: {0}")]
    Discord(#[from] serenity::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!(error = %why, "bot stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = BotConfig::from_env()?;
    info!(config = ?config, "configuration loaded");

    let app_state = Arc::new(AppState::new(&config)?);

    let http = HttpBuilder::new(&config.discord.token)
        .application_id(config.discord.application_id)
        .build();

    // Interactions arrive with GUILDS alone; no message content is read.
    let mut client = ClientBuilder::new_with_http(http, GatewayIntents::GUILDS)
        .event_handler(Handler {
            guild_id: config.discord.guild_id,
        })
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    client.start().await?;
    Ok(())
}
