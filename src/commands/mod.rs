//! Slash commands offered by the bot and their one-time registration.

pub mod prices;

use serenity::builder::CreateCommand;
use serenity::http::Http;
use serenity::model::application::Command;
use serenity::model::id::GuildId;
use tracing::debug;

/// Every command descriptor, built fresh for registration.
pub fn all() -> Vec<CreateCommand> {
    vec![prices::register()]
}

/// Creates each command in `guild_id`, one POST per descriptor.
///
/// `http` must carry the application id; serenity fills it in on `ready`, and
/// the binary also sets it up front from configuration.
pub async fn install(http: &Http, guild_id: GuildId) -> Result<Vec<Command>, serenity::Error> {
    let mut installed = Vec::new();
    for builder in all() {
        debug!(guild = %guild_id, command = ?builder, "installing guild command");
        let command = guild_id.create_command(http, builder).await?;
        debug!(guild = %guild_id, name = %command.name, id = %command.id, "guild command registered");
        installed.push(command);
    }
    Ok(installed)
}
