use serenity::async_trait;
use std::collections::BTreeMap;

use crate::error::AppError;

use super::{
    Command, CommandContext, CommandRegistry, Invocation, Reply, ReplyEmbed, EMBED_COLOR_BLURPLE,
};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(Help));
}

/// Lists every registered command grouped by category.
pub struct Help;

#[async_trait]
impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn category(&self) -> &'static str {
        "utility"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        _invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        Ok(Reply::Embed(help_embed(ctx.registry, ctx.prefix)))
    }
}

/// Builds the help embed. Silent commands are left out.
pub fn help_embed(registry: &CommandRegistry, prefix: &str) -> ReplyEmbed {
    let mut categories: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for command in registry.commands().filter(|command| !command.silent()) {
        categories
            .entry(command.category())
            .or_default()
            .push(command.name());
    }

    let fields = categories
        .into_iter()
        .map(|(category, mut names)| {
            names.sort_unstable();
            (format!("📁 {}", category), names.join(", "), false)
        })
        .collect();

    ReplyEmbed {
        title: "📜 Bot Commands".to_string(),
        fields,
        color: EMBED_COLOR_BLURPLE,
        footer: Some(format!("Prefix: {}", prefix)),
        ..Default::default()
    }
}
