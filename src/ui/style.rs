//! Central UI style constants and helpers.
use serenity::builder::CreateEmbed;

pub const COLOR_MARKET: u32 = 0xC1A979; // Lost Ark gold, 12691833
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_GOLD: &str = "<:gold:976615153485352960>";

pub const MARKET_AUTHOR_NAME: &str = "LostarkMarket.Online";
pub const MARKET_AUTHOR_ICON: &str = "https://www.lostarkmarket.online/assets/icons/favicon.png";

/// Formats an amount of gold with the server's gold emoji, e.g. `150 <:gold:…>`.
pub fn gold(amount: f64) -> String {
    format!("{amount} {EMOJI_GOLD}")
}

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
