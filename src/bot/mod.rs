//! Discord bot integration.
//!
//! The bot listens for guild messages, runs prefix commands through the command
//! registry and exposes the REST client to the giveaway scheduler through
//! `SerenityPlatform`.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and the permission cache
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod platform;
pub mod start;
