//! Discord session for paginated lists.
//!
//! [`present`] posts the first page and, when the list has more than one page, spawns a
//! task that owns a [`Navigator`] for that message. Reaction events are routed to the task
//! through the [`PresenterRegistry`]; the task edits the message on every page change and
//! removes its navigation reactions when stopped or when its lifetime runs out.

use std::{collections::HashMap, sync::Arc, time::Duration};

use serenity::{
    all::{
        Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, EditMessage, Http, Message,
        MessageId, ReactionType,
    },
    async_trait,
};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};

use crate::{
    bot::reply::Reply,
    config::Config,
    error::AppError,
    service::presenter::{Control, Navigator, Page, PageSet, Transition},
};

/// Embed colour of list messages.
pub const LIST_COLOUR: Colour = Colour::new(7_265_400);

const CONTROL_BUFFER: usize = 16;

/// Routes navigation presses to the task owning each paginated message.
#[derive(Clone, Default)]
pub struct PresenterRegistry {
    sessions: Arc<Mutex<HashMap<MessageId, mpsc::Sender<Control>>>>,
}

impl PresenterRegistry {
    async fn register(&self, message_id: MessageId, sender: mpsc::Sender<Control>) {
        self.sessions.lock().await.insert(message_id, sender);
    }

    async fn remove(&self, message_id: MessageId) {
        self.sessions.lock().await.remove(&message_id);
    }

    pub async fn is_active(&self, message_id: MessageId) -> bool {
        self.sessions.lock().await.contains_key(&message_id)
    }

    /// Forwards a press to the session of `message_id`.
    ///
    /// # Returns
    /// - `true` if a live session received the control
    pub async fn dispatch(&self, message_id: MessageId, control: Control) -> bool {
        let sender = self.sessions.lock().await.get(&message_id).cloned();
        match sender {
            Some(sender) => sender.send(control).await.is_ok(),
            None => false,
        }
    }
}

/// Builds the embed for one page.
pub fn page_embed(page: &Page, config: &Config, colour: Colour) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .colour(colour)
        .author(
            CreateEmbedAuthor::new("Honeymoon")
                .url(&config.site_url)
                .icon_url(&config.guild_icon_url),
        )
        .title(&page.title)
        .description(&page.description);
    if let Some(footer) = &page.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    embed
}

/// Sends a list and keeps it navigable until stopped or expired.
///
/// # Arguments
/// - `reply` - Where to post the first page
/// - `registry` - Receives the session so reaction events reach it
/// - `config` - Embed branding and presenter lifetime
/// - `pages` - Rendered pages, at least one
/// - `allow_stop` - Whether a stop control is offered
pub async fn present(
    reply: &Reply<'_>,
    registry: &PresenterRegistry,
    config: &Arc<Config>,
    pages: PageSet,
    allow_stop: bool,
) -> Result<(), AppError> {
    let Some(first) = pages.first() else {
        return Ok(());
    };
    let message = reply.send(page_embed(first, config, LIST_COLOUR)).await?;
    if !pages.is_paged() {
        return Ok(());
    }

    let message_id = message.id;
    let surface = MessageSurface {
        http: reply.ctx().http.clone(),
        message,
        config: Arc::clone(config),
    };
    start_session(
        registry,
        message_id,
        surface,
        pages,
        allow_stop,
        config.presenter_lifetime,
    )
    .await;

    Ok(())
}

/// Where a session renders pages and shows its controls.
#[async_trait]
trait Surface: Send {
    async fn attach(&mut self, controls: &[Control]);
    async fn show(&mut self, index: usize, page: &Page);
    async fn revoke(&mut self, controls: &[Control]);
}

/// Registers a session for `message_id`, attaches its controls and spawns its task.
///
/// The registry entry is removed once the task ends.
async fn start_session<S>(
    registry: &PresenterRegistry,
    message_id: MessageId,
    mut surface: S,
    pages: PageSet,
    allow_stop: bool,
    lifetime: Duration,
) -> JoinHandle<()>
where
    S: Surface + 'static,
{
    let navigator = Navigator::new(pages.page_count(), allow_stop);
    let (sender, receiver) = mpsc::channel(CONTROL_BUFFER);

    // Presses made while controls are still being added queue up in the channel.
    registry.register(message_id, sender).await;
    surface.attach(&navigator.controls()).await;

    let session = Session {
        surface,
        pages,
        navigator,
    };
    let registry = registry.clone();
    tokio::spawn(async move {
        session.run(receiver, lifetime).await;
        registry.remove(message_id).await;
    })
}

fn control_reaction(control: Control) -> ReactionType {
    ReactionType::Unicode(control.emoji().to_string())
}

struct MessageSurface {
    http: Arc<Http>,
    message: Message,
    config: Arc<Config>,
}

#[async_trait]
impl Surface for MessageSurface {
    async fn attach(&mut self, controls: &[Control]) {
        for &control in controls {
            if let Err(e) = self.message.react(&self.http, control_reaction(control)).await {
                tracing::debug!("Failed to add navigation reaction: {}", e);
            }
        }
    }

    async fn show(&mut self, index: usize, page: &Page) {
        let embed = page_embed(page, &self.config, LIST_COLOUR);
        if let Err(e) = self
            .message
            .edit(&self.http, EditMessage::new().embed(embed))
            .await
        {
            tracing::error!("Failed to show page {} of {}: {}", index + 1, self.message.id, e);
        }
    }

    async fn revoke(&mut self, controls: &[Control]) {
        for &control in controls {
            if let Err(e) = self
                .message
                .delete_reaction_emoji(&self.http, control_reaction(control))
                .await
            {
                tracing::debug!("Failed to remove navigation reaction: {}", e);
            }
        }
    }
}

struct Session<S> {
    surface: S,
    pages: PageSet,
    navigator: Navigator,
}

impl<S: Surface> Session<S> {
    async fn run(mut self, mut receiver: mpsc::Receiver<Control>, lifetime: Duration) {
        let deadline = tokio::time::sleep(lifetime);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                control = receiver.recv() => {
                    let Some(control) = control else { break };
                    match self.navigator.apply(control) {
                        Transition::Show(index) => {
                            if let Some(page) = self.pages.get(index) {
                                self.surface.show(index, page).await;
                            }
                        }
                        Transition::Stopped => break,
                        Transition::Unchanged => {}
                    }
                }
                _ = &mut deadline => {
                    self.navigator.expire();
                    break;
                }
            }
        }

        self.surface.revoke(&self.navigator.controls()).await;
    }
}
