mod bot;
mod config;
mod data;
mod error;
mod game;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::{command::CommandRegistry, platform::SerenityPlatform},
    config::Config,
    error::AppError,
    scheduler::giveaway::GiveawayScheduler,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting coinboard");

    let discord_http = Arc::new(Http::new(&config.discord_bot_token));
    let platform = Arc::new(SerenityPlatform::new(discord_http));

    let mut giveaways =
        GiveawayScheduler::new(db.clone(), platform, config.reaction_fetch_timeout).await?;
    giveaways.start().await?;

    let state = BotState::new(
        db.clone(),
        giveaways.clone(),
        CommandRegistry::with_default_commands(),
        config.command_prefix.clone(),
    );

    let bot_client = bot::start::init_bot(&config, state).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        }
        _ = bot_task => {
            tracing::warn!("Discord bot stopped, shutting down");
        }
    }

    shard_manager.shutdown_all().await;

    if let Err(e) = giveaways.shutdown().await {
        tracing::error!("Failed to stop giveaway scheduler: {}", e);
    }

    db.close().await?;

    Ok(())
}
