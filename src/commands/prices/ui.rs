//! Builds the price card shown in reply to `/prices`.

use chrono::{DateTime, Utc};
use serenity::builder::{CreateEmbed, CreateEmbedAuthor};

use crate::market::{LookupError, PriceRecord, Region};
use crate::ui::style::{self, COLOR_MARKET, MARKET_AUTHOR_ICON, MARKET_AUTHOR_NAME};
use crate::util::humanize_relative;

#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub name: &'static str,
    pub value: String,
    pub inline: bool,
}

impl CardField {
    fn inline(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            inline: true,
        }
    }
}

/// Display payload for one market record, independent of Discord's builders.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub description: String,
    pub color: u32,
    pub fields: Vec<CardField>,
    pub author_name: &'static str,
    pub author_icon_url: &'static str,
    pub thumbnail_url: String,
}

impl PriceCard {
    pub fn embed(&self) -> CreateEmbed {
        let author = CreateEmbedAuthor::new(self.author_name).icon_url(self.author_icon_url);
        CreateEmbed::new()
            .description(&self.description)
            .color(self.color)
            .fields(
                self.fields
                    .iter()
                    .map(|field| (field.name, field.value.clone(), field.inline)),
            )
            .author(author)
            .thumbnail(&self.thumbnail_url)
    }
}

pub fn price_card(record: &PriceRecord, region: Region, now: DateTime<Utc>) -> PriceCard {
    PriceCard {
        description: format!("**{}**", record.name),
        color: COLOR_MARKET,
        fields: vec![
            CardField::inline("Recent Price", style::gold(record.recent_price)),
            CardField::inline("Lowest Price", style::gold(record.low_price)),
            CardField::inline("Cheapest Rem.", record.cheapest_remaining.as_str()),
            CardField::inline("Region", region.label()),
            CardField::inline("Last update", humanize_relative(record.updated_at - now)),
        ],
        author_name: MARKET_AUTHOR_NAME,
        author_icon_url: MARKET_AUTHOR_ICON,
        thumbnail_url: record.image.clone(),
    }
}

pub fn lookup_failure_embed(err: &LookupError) -> CreateEmbed {
    let title = match err {
        LookupError::NotFound { .. } => "Item not found",
        LookupError::UpstreamUnavailable(_) => "Market unavailable",
        LookupError::MalformedResponse(_) => "Unreadable market data",
    };
    style::error_embed(title, err.user_message())
}

pub fn invalid_request_embed(reason: impl std::fmt::Display) -> CreateEmbed {
    style::error_embed("Invalid request", format!("Could not read the command options: {reason}."))
}

pub fn not_ready_embed() -> CreateEmbed {
    style::error_embed(
        "Bot not ready",
        "The bot is still starting up. Please try again in a moment.",
    )
}
