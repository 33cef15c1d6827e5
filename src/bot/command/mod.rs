//! Prefix command dispatcher.
//!
//! Commands are looked up by name or alias in a `CommandRegistry`. The message handler
//! turns a Discord message into a platform-neutral `Invocation`, the registry validates
//! and executes the matching command, and the returned `Reply` is rendered back to
//! Discord by the handler.

pub mod economy;
pub mod games;
pub mod giveaway;
pub mod help;


use sea_orm::DatabaseConnection;
use serenity::{all::Permissions, async_trait};
use std::collections::HashMap;

use crate::{error::AppError, model::account::Member, scheduler::giveaway::GiveawayScheduler};

pub const EMBED_COLOR_GOLD: u32 = 0xFFD700;
pub const EMBED_COLOR_BLURPLE: u32 = 0x5865F2;

/// A user mentioned in the invoking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub user_id: u64,
    pub name: String,
    pub bot: bool,
}

impl Mention {
    pub fn member(&self) -> Member {
        Member {
            user_id: self.user_id,
            bot: self.bot,
        }
    }
}

/// A parsed command message.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub guild_id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub author_name: String,
    /// Whitespace-separated tokens after the command name, mentions included.
    pub args: Vec<String>,
    pub mentions: Vec<Mention>,
    pub permissions: Permissions,
    /// Epoch milliseconds at which the message was received.
    pub now_ms: i64,
}

impl Invocation {
    /// Arguments that are not user, role or channel mentions.
    pub fn plain_args(&self) -> Vec<&str> {
        self.args
            .iter()
            .map(String::as_str)
            .filter(|arg| !is_mention(arg))
            .collect()
    }

    pub fn first_mention(&self) -> Option<&Mention> {
        self.mentions.first()
    }
}

fn is_mention(token: &str) -> bool {
    token.starts_with("<@") || token.starts_with("<#")
}

/// Splits `content` into a lowercased command name and its arguments.
///
/// Returns `None` when the message does not start with `prefix` or has no name.
pub fn parse_command<'c>(prefix: &str, content: &'c str) -> Option<(String, Vec<&'c str>)> {
    let body = content.trim_start().strip_prefix(prefix)?;
    let mut tokens = body.split_whitespace();
    let name = tokens.next()?.to_lowercase();

    Some((name, tokens.collect()))
}

/// Embed body of a reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyEmbed {
    pub title: String,
    pub description: Option<String>,
    /// `(name, value, inline)`
    pub fields: Vec<(String, String, bool)>,
    pub color: u32,
    pub footer: Option<String>,
}

/// What the handler should do after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(ReplyEmbed),
    /// Remove the invoking message and say nothing.
    DeleteInvocation,
    Nothing,
}

/// Shared resources commands run against.
pub struct CommandContext<'a> {
    pub db: &'a DatabaseConnection,
    pub giveaways: &'a GiveawayScheduler,
    pub registry: &'a CommandRegistry,
    pub prefix: &'a str,
}

/// A text command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Argument synopsis shown in usage errors and help, without the prefix.
    fn usage(&self) -> &'static str;

    /// Help section the command is listed under.
    fn category(&self) -> &'static str;

    /// Guild permission the invoker must hold, with its display name.
    fn required_permission(&self) -> Option<(Permissions, &'static str)> {
        None
    }

    /// Silent commands never reply with errors; rejections are only logged.
    fn silent(&self) -> bool {
        false
    }

    /// Checks the invocation before `execute`; the default enforces the required permission.
    fn validate(&self, invocation: &Invocation) -> Result<(), AppError> {
        if let Some((permission, display)) = self.required_permission() {
            if !invocation.permissions.contains(permission) {
                return Err(AppError::PermissionDenied(display));
            }
        }

        Ok(())
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError>;
}

/// Lookup table from command names and aliases to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    lookup: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every command the bot ships.
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();

        economy::register(&mut registry);
        games::register(&mut registry);
        giveaway::register(&mut registry);
        help::register(&mut registry);

        registry
    }

    /// Adds a command under its name and aliases. Later registrations shadow earlier ones.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let index = self.commands.len();

        self.lookup.insert(command.name(), index);
        for alias in command.aliases() {
            self.lookup.insert(*alias, index);
        }

        self.commands.push(command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.lookup
            .get(name)
            .map(|index| self.commands[*index].as_ref())
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|command| command.as_ref())
    }

    /// Validates and executes `command`, turning errors into replies.
    ///
    /// Rejections become the error's user message. Infrastructure failures are logged
    /// and answered with a generic message. Silent commands answer nothing either way.
    pub async fn run(
        &self,
        command: &dyn Command,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Reply {
        let result = match command.validate(invocation) {
            Ok(()) => command.execute(ctx, invocation).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(reply) => reply,
            Err(e) if command.silent() => {
                if e.is_rejection() {
                    tracing::debug!("Silent command {} rejected: {}", command.name(), e);
                } else {
                    tracing::error!("Silent command {} failed: {}", command.name(), e);
                }
                Reply::Nothing
            }
            Err(e) => Reply::Text(e.user_message()),
        }
    }
}
