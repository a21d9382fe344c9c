//! Runtime configuration, read once at startup from the environment.

use std::env;

use reqwest::Url;
use serenity::model::id::{ApplicationId, GuildId};
use thiserror::Error;

pub const DEFAULT_MARKET_API_BASE: &str = "https://www.lostarkmarket.online/api/export-market-live";
pub const DEFAULT_MARKET_TIMEOUT_MS: u64 = 2_500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("invalid value for `{key}`: `{value}` ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub market: MarketConfig,
}

#[derive(Clone)]
pub struct DiscordConfig {
    pub token: String,
    pub application_id: ApplicationId,
    /// The guild the slash commands are installed in.
    pub guild_id: GuildId,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub base_url: Url,
    pub timeout_ms: u64,
}

impl BotConfig {
    /// Reads the configuration from the process environment.
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(read_env)
    }

    /// Builds the configuration from an arbitrary variable source.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let application_id = ApplicationId::new(parse_id("APP_ID", get("APP_ID"))?);
        let guild_id = GuildId::new(parse_id("GUILD_ID", get("GUILD_ID"))?);

        let base_url = parse_base_url(
            "MARKET_API_BASE",
            get("MARKET_API_BASE").unwrap_or_else(|| DEFAULT_MARKET_API_BASE.to_string()),
        )?;
        let mut timeout_ms = DEFAULT_MARKET_TIMEOUT_MS;
        if let Some(value) = get("MARKET_API_TIMEOUT_MS") {
            timeout_ms = match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "MARKET_API_TIMEOUT_MS",
                        value,
                        reason: "expected a positive number of milliseconds",
                    });
                }
            };
        }

        Ok(Self {
            discord: DiscordConfig {
                token,
                application_id,
                guild_id,
            },
            market: MarketConfig {
                base_url,
                timeout_ms,
            },
        })
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

// Discord snowflakes are non-zero; serenity's id constructors panic on zero.
fn parse_id(key: &'static str, value: Option<String>) -> Result<u64, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(key))?;
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a non-zero Discord id",
        }),
    }
}

fn parse_base_url(key: &'static str, value: String) -> Result<Url, ConfigError> {
    match Url::parse(value.trim()) {
        Ok(url) if !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected an absolute http(s) URL",
        }),
    }
}
