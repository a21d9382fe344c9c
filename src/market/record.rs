//! Payload shapes returned by the market export API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A live market snapshot for one item in one region.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub name: String,
    pub recent_price: f64,
    pub low_price: f64,
    #[serde(deserialize_with = "text_or_number")]
    pub cheapest_remaining: String,
    pub image: String,
    pub updated_at: DateTime<Utc>,
}

// The export has shipped this field both as a string and as a bare count.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Remaining {
        Text(String),
        Count(serde_json::Number),
    }

    Ok(match Remaining::deserialize(deserializer)? {
        Remaining::Text(text) => text,
        // Print like the prices do: 4210.0 reads as 4210.
        Remaining::Count(count) => match count.as_f64() {
            Some(value) => value.to_string(),
            None => count.to_string(),
        },
    })
}
