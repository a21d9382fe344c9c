use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{error, info, warn};

use crate::commands;

pub struct Handler {
    /// Guild that receives the slash commands on startup.
    pub guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = &interaction else {
            return;
        };
        match command.data.name.as_str() {
            commands::prices::NAME => commands::prices::run_slash(&ctx, command).await,
            other => warn!(command = other, "received an unknown slash command"),
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "connected to the gateway");
        match commands::install(&ctx.http, self.guild_id).await {
            Ok(installed) => info!(count = installed.len(), guild = %self.guild_id, "guild commands registered"),
            Err(why) => error!(error = ?why, guild = %self.guild_id, "failed to register guild commands"),
        }
    }
}
