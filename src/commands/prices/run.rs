//! Handles the command logic for `/prices`.

use chrono::{DateTime, Utc};
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandDataOption, CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use thiserror::Error;
use tracing::{debug, error, warn};

use super::ui::{
    PriceCard, invalid_request_embed, lookup_failure_embed, not_ready_embed, price_card,
};
use crate::AppState;
use crate::market::{LookupError, PriceLookup, Region, UnknownRegion};

pub const NAME: &str = "prices";
pub const OPTION_REGION: &str = "region";
pub const OPTION_ITEM: &str = "item";

pub fn register() -> CreateCommand {
    let region = Region::choices().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            OPTION_REGION,
            "The region to get prices from",
        )
        .required(true),
        |option, (label, key)| option.add_string_choice(label, key),
    );

    CreateCommand::new(NAME)
        .description("Get the current prices of Lost Ark Market Online")
        .add_option(region)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPTION_ITEM,
                "The item to get prices from",
            )
            .required(true),
        )
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing `{0}` option")]
    Missing(&'static str),
    #[error(transparent)]
    Region(#[from] UnknownRegion),
}

/// The resolved options of one `/prices` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricesArgs {
    pub region: Region,
    pub item: String,
}

impl PricesArgs {
    pub fn parse(region: Option<&str>, item: Option<&str>) -> Result<Self, ArgsError> {
        let region = region.ok_or(ArgsError::Missing(OPTION_REGION))?.parse::<Region>()?;
        let item = item
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .ok_or(ArgsError::Missing(OPTION_ITEM))?;
        Ok(Self {
            region,
            item: item.to_string(),
        })
    }

    pub fn from_options(options: &[CommandDataOption]) -> Result<Self, ArgsError> {
        Self::parse(
            option_str(options, OPTION_REGION),
            option_str(options, OPTION_ITEM),
        )
    }
}

fn option_str<'a>(options: &'a [CommandDataOption], name: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_str())
}

/// Looks the item up and formats the first matching record.
pub async fn lookup_card<L>(
    market: &L,
    args: &PricesArgs,
    now: DateTime<Utc>,
) -> Result<PriceCard, LookupError>
where
    L: PriceLookup + ?Sized,
{
    let record = market.lookup(args.region, &args.item).await?;
    Ok(price_card(&record, args.region, now))
}

/// Builds the full interaction response, logging any failure exactly once.
pub async fn respond<L>(market: &L, args: &PricesArgs) -> CreateInteractionResponse
where
    L: PriceLookup + ?Sized,
{
    let message = match lookup_card(market, args, Utc::now()).await {
        Ok(card) => CreateInteractionResponseMessage::new().embed(card.embed()),
        Err(err) => {
            error!(
                region = args.region.key(),
                item = %args.item,
                error = %err,
                "price lookup failed"
            );
            return failure_response(lookup_failure_embed(&err));
        }
    };
    CreateInteractionResponse::Message(message)
}

/// Ephemeral answer for options that could not be resolved.
pub fn invalid_request_response(err: &ArgsError) -> CreateInteractionResponse {
    failure_response(invalid_request_embed(err))
}

/// Ephemeral answer when the shared state has not been installed yet.
pub fn not_ready_response() -> CreateInteractionResponse {
    failure_response(not_ready_embed())
}

fn failure_response(embed: CreateEmbed) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    debug!(
        command = NAME,
        user = %interaction.user.id,
        options = ?interaction.data.options,
        "interaction received"
    );

    let response = match PricesArgs::from_options(&interaction.data.options) {
        Ok(args) => {
            match AppState::from_ctx(ctx).await {
                Some(app_state) => respond(&app_state.market, &args).await,
                None => {
                    error!("AppState missing from the client TypeMap");
                    not_ready_response()
                }
            }
        }
        Err(err) => {
            warn!(error = %err, "rejected /prices options");
            invalid_request_response(&err)
        }
    };

    if let Err(why) = interaction.create_response(&ctx.http, response).await {
        error!(error = ?why, "failed to answer /prices");
    }
}
