//! Message handler: turns guild messages into command invocations.

use chrono::Utc;
use serenity::all::{
    Context, CreateAllowedMentions, CreateEmbed, CreateEmbedFooter, CreateMessage, Message,
};

use crate::{
    bot::command::{parse_command, CommandContext, Invocation, Mention, Reply, ReplyEmbed},
    state::BotState,
};

/// Handle message creation in a channel
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }
    // Commands only run in guild channels, not DMs
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let Some((name, args)) = parse_command(&state.prefix, &message.content) else {
        return;
    };
    let Some(command) = state.registry.get(&name) else {
        return;
    };

    let permissions = match message.author_permissions(&ctx.cache) {
        Some(permissions) => permissions,
        None => {
            tracing::debug!(
                "No cached permissions for {} in guild {}",
                message.author.id,
                guild_id
            );
            Default::default()
        }
    };

    let invocation = Invocation {
        guild_id: guild_id.get(),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        author_name: message.author.name.clone(),
        args: args.into_iter().map(str::to_string).collect(),
        mentions: message
            .mentions
            .iter()
            .map(|user| Mention {
                user_id: user.id.get(),
                name: user.name.clone(),
                bot: user.bot,
            })
            .collect(),
        permissions,
        now_ms: Utc::now().timestamp_millis(),
    };

    tracing::debug!(
        "Running {} for {} in guild {}",
        command.name(),
        invocation.author_id,
        invocation.guild_id
    );

    let command_ctx = CommandContext {
        db: &state.db,
        giveaways: &state.giveaways,
        registry: &state.registry,
        prefix: &state.prefix,
    };

    let reply = state
        .registry
        .run(command, &command_ctx, &invocation)
        .await;

    if let Err(e) = send_reply(&ctx, &message, reply).await {
        tracing::error!("Failed to reply to {} command: {}", command.name(), e);
    }
}

fn build_embed(embed: ReplyEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(embed.title).color(embed.color);

    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    for (name, value, inline) in embed.fields {
        builder = builder.field(name, value, inline);
    }
    if let Some(footer) = embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }

    builder
}

async fn send_reply(ctx: &Context, message: &Message, reply: Reply) -> serenity::Result<()> {
    match reply {
        Reply::Text(text) => {
            message.reply(&ctx.http, text).await?;
        }
        Reply::Embed(embed) => {
            let builder = CreateMessage::new()
                .embed(build_embed(embed))
                .reference_message(message)
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false));
            message.channel_id.send_message(&ctx.http, builder).await?;
        }
        Reply::DeleteInvocation => {
            message.delete(&ctx.http).await?;
        }
        Reply::Nothing => {}
    }

    Ok(())
}
