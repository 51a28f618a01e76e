//! Replying to chat commands and slash commands through one interface.
//!
//! Chat commands answer with a message that references the invoking message; slash
//! commands answer with the interaction response, then with follow-ups. Mentions are
//! never pinged.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use serenity::all::{
    CommandInteraction, Context, CreateAllowedMentions, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, EditMessage,
    Message,
};

use crate::error::AppError;

/// Text and/or embed of a reply.
#[derive(Debug, Clone, Default)]
pub struct ReplyContent {
    text: Option<String>,
    embed: Option<CreateEmbed>,
}

impl ReplyContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            embed: None,
        }
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            text: None,
            embed: Some(embed),
        }
    }

    fn into_message(self, mut builder: CreateMessage) -> CreateMessage {
        if let Some(text) = self.text {
            builder = builder.content(text);
        }
        if let Some(embed) = self.embed {
            builder = builder.embed(embed);
        }
        builder.allowed_mentions(CreateAllowedMentions::new())
    }

    fn into_response(self, ephemeral: bool) -> CreateInteractionResponseMessage {
        let mut builder = CreateInteractionResponseMessage::new()
            .ephemeral(ephemeral)
            .allowed_mentions(CreateAllowedMentions::new());
        if let Some(text) = self.text {
            builder = builder.content(text);
        }
        if let Some(embed) = self.embed {
            builder = builder.embed(embed);
        }
        builder
    }

    fn into_followup(self, ephemeral: bool) -> CreateInteractionResponseFollowup {
        let mut builder = CreateInteractionResponseFollowup::new()
            .ephemeral(ephemeral)
            .allowed_mentions(CreateAllowedMentions::new());
        if let Some(text) = self.text {
            builder = builder.content(text);
        }
        if let Some(embed) = self.embed {
            builder = builder.embed(embed);
        }
        builder
    }
}

impl From<&str> for ReplyContent {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for ReplyContent {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<CreateEmbed> for ReplyContent {
    fn from(embed: CreateEmbed) -> Self {
        Self::embed(embed)
    }
}

enum Source<'a> {
    Message(&'a Message),
    Interaction(&'a CommandInteraction),
}

/// Where and how a command answers.
pub struct Reply<'a> {
    ctx: &'a Context,
    source: Source<'a>,
    ephemeral: bool,
    responded: AtomicBool,
}

impl<'a> Reply<'a> {
    pub fn to_message(ctx: &'a Context, message: &'a Message) -> Self {
        Self {
            ctx,
            source: Source::Message(message),
            ephemeral: false,
            responded: AtomicBool::new(false),
        }
    }

    pub fn to_interaction(ctx: &'a Context, interaction: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            source: Source::Interaction(interaction),
            ephemeral: false,
            responded: AtomicBool::new(false),
        }
    }

    /// Makes interaction replies visible to the invoking user only. No effect on chat replies.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn ctx(&self) -> &'a Context {
        self.ctx
    }

    pub fn is_interaction(&self) -> bool {
        matches!(self.source, Source::Interaction(_))
    }

    /// Sends a reply and returns the posted message.
    pub async fn send(&self, content: impl Into<ReplyContent>) -> Result<Message, AppError> {
        let content = content.into();
        let http = &self.ctx.http;

        match self.source {
            Source::Message(message) => {
                let builder = content.into_message(CreateMessage::new().reference_message(message));
                Ok(message.channel_id.send_message(http, builder).await?)
            }
            Source::Interaction(interaction) => {
                if self.responded.swap(true, Ordering::SeqCst) {
                    let builder = content.into_followup(self.ephemeral);
                    return Ok(interaction.create_followup(http, builder).await?);
                }
                let builder = content.into_response(self.ephemeral);
                interaction
                    .create_response(http, CreateInteractionResponse::Message(builder))
                    .await?;
                Ok(interaction.get_response(http).await?)
            }
        }
    }

    /// Replaces the text of a reply sent with [`Self::send`].
    pub async fn edit(&self, message: &mut Message, text: &str) -> Result<(), AppError> {
        match self.source {
            Source::Message(_) => {
                message
                    .edit(self.ctx, EditMessage::new().content(text))
                    .await?;
            }
            Source::Interaction(interaction) => {
                *message = interaction
                    .edit_response(&self.ctx.http, EditInteractionResponse::new().content(text))
                    .await?;
            }
        }
        Ok(())
    }

    /// Sends a notice that deletes itself after `lifetime`. Failures are ignored.
    pub async fn notify(&self, text: &str, lifetime: Duration) {
        if text.trim().is_empty() {
            return;
        }
        let message = match self.send(text).await {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Failed to send notice: {}", e);
                return;
            }
        };

        let http = self.ctx.http.clone();
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Err(e) = message.delete(&http).await {
                tracing::debug!("Failed to delete notice {}: {}", message.id, e);
            }
        });
    }
}
