//! Shared state stored in Serenity's global context.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;

use crate::config::BotConfig;
use crate::market::MarketClient;

/// Read-only state shared by every interaction task.
pub struct AppState {
    /// Client for the market export API; cheap to share, pools its connections.
    pub market: MarketClient,
}

impl AppState {
    pub fn new(config: &BotConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            market: MarketClient::new(&config.market)?,
        })
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
