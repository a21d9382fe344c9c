//! HTTP client for the Lost Ark Market Online export API.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serenity::async_trait;
use tracing::{debug, instrument};

use super::{LookupError, PriceRecord, Region, UpstreamFailure};
use crate::config::MarketConfig;

/// Anything able to answer "what does this item cost in that region".
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn lookup(&self, region: Region, item_id: &str) -> Result<PriceRecord, LookupError>;
}

#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MarketClient {
    pub fn new(config: &MarketConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The per-region export URL, with the region label as the last path segment.
    pub fn endpoint(&self, region: Region) -> Url {
        let mut url = self.base_url.clone();
        // Config validation guarantees the base can carry path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(region.label());
        }
        url
    }
}

#[async_trait]
impl PriceLookup for MarketClient {
    #[instrument(level = "debug", skip(self, region), fields(region = region.key()))]
    async fn lookup(&self, region: Region, item_id: &str) -> Result<PriceRecord, LookupError> {
        let response = self
            .http
            .get(self.endpoint(region))
            .query(&[("items", item_id)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                region,
                item: item_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(UpstreamFailure::Status(status).into());
        }

        let body = response.bytes().await?;
        let records: Vec<PriceRecord> = serde_json::from_slice(&body)?;
        debug!(matches = records.len(), "market API answered");

        records
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound {
                region,
                item: item_id.to_string(),
            })
    }
}
