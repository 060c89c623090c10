//! Event dispatcher and handler registry
//!
//! The [`App`] owns the Slack client, the process-wide configuration,
//! and the registered [`EventHandler`] bindings. A dispatch cycle
//! delivers a [`ReceiverEvent`] to the first handler whose `matches`
//! accepts the payload; events nobody claims are dropped silently.
//!
//! Two bindings ship with the bot:
//! - [`MessageAutoReply`]: react to every user message, then reply in
//!   its thread.
//! - [`GreetCommand`]: acknowledge `/greet`, then greet the invoking
//!   user ephemerally.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::logic::client::SlackApi;
use crate::logic::event::ReceiverEvent;
use crate::logic::reply::{reply_message, reply_private_message, reply_reaction};
use crate::types::{
    AUTO_REPLY_TEXT, DEFAULT_REACTION, GREET_COMMAND, GREET_REPLY_TEXT, ParsedPayload,
    SlackConfiguration, SlackPrivateReply, SlackReactionReply, SlackReply,
};

/// What a handler gets to work with: the injected client and the bot
/// credential from the process configuration.
pub struct HandlerContext<'a> {
    pub client: &'a dyn SlackApi,
    pub bot_token: Option<&'a str>,
}

/// A binding between an inbound event shape and its reply actions.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Whether this handler claims the payload.
    fn matches(&self, payload: &ParsedPayload) -> bool;

    /// Run the binding. The event is consumed so the handler can use
    /// its one-shot acknowledgment.
    async fn handle(&self, ctx: &HandlerContext<'_>, event: ReceiverEvent);
}

/// The processing engine: holds the client, configuration, and the
/// handler registry.
pub struct App {
    client: Arc<dyn SlackApi>,
    config: SlackConfiguration,
    handlers: Vec<Box<dyn EventHandler>>,
}

impl App {
    /// Create an app with an empty registry.
    pub fn new(client: Arc<dyn SlackApi>, config: SlackConfiguration) -> Self {
        Self {
            client,
            config,
            handlers: Vec::new(),
        }
    }

    /// Create an app with the two built-in bindings registered.
    pub fn with_default_handlers(client: Arc<dyn SlackApi>, config: SlackConfiguration) -> Self {
        let mut app = Self::new(client, config);
        app.register(MessageAutoReply);
        app.register(GreetCommand);
        app
    }

    /// Add a binding to the registry.
    pub fn register<H: EventHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver a canonical event to the first matching binding.
    /// Unmatched events are ignored.
    pub async fn process_event(&self, event: ReceiverEvent) {
        let ctx = HandlerContext {
            client: self.client.as_ref(),
            bot_token: self.config.bot_token.as_deref(),
        };

        for handler in &self.handlers {
            if handler.matches(&event.body) {
                handler.handle(&ctx, event).await;
                return;
            }
        }

        trace!("No handler matched inbound event");
    }
}

/// Binding A: on any inbound user message, add the default reaction,
/// then post the greeting in the message's thread. The reaction is
/// awaited first so it appears before the reply.
pub struct MessageAutoReply;

#[async_trait]
impl EventHandler for MessageAutoReply {
    fn matches(&self, payload: &ParsedPayload) -> bool {
        payload
            .event()
            .and_then(|event| event.get("type"))
            .and_then(|t| t.as_str())
            == Some("message")
    }

    async fn handle(&self, ctx: &HandlerContext<'_>, event: ReceiverEvent) {
        let Some(message) = event.body.event() else {
            return;
        };

        // Ignore our own replies and message subtypes (joins, edits)
        // so the bot cannot loop on itself.
        if message.contains_key("bot_id") || message.contains_key("subtype") {
            trace!("Skipping bot message or subtype");
            return;
        }

        let (Some(channel), Some(ts)) = (
            message.get("channel").and_then(|v| v.as_str()),
            message.get("ts").and_then(|v| v.as_str()),
        ) else {
            trace!("Message event without channel or ts, skipping");
            return;
        };

        let reaction_packet = SlackReactionReply {
            bot_token: ctx.bot_token.map(String::from),
            channel_id: channel.to_string(),
            thread_timestamp: ts.to_string(),
            reaction: DEFAULT_REACTION.to_string(),
        };
        reply_reaction(ctx.client, &reaction_packet).await;

        let message_packet = SlackReply {
            bot_token: ctx.bot_token.map(String::from),
            channel_id: channel.to_string(),
            thread_timestamp: ts.to_string(),
            message: AUTO_REPLY_TEXT.to_string(),
        };
        reply_message(ctx.client, &message_packet).await;
    }
}

/// Binding B: acknowledge the `/greet` slash command immediately, then
/// greet the invoking user with an ephemeral message in the invoking
/// channel.
pub struct GreetCommand;

#[async_trait]
impl EventHandler for GreetCommand {
    fn matches(&self, payload: &ParsedPayload) -> bool {
        payload.str_field("command") == Some(GREET_COMMAND)
    }

    async fn handle(&self, ctx: &HandlerContext<'_>, event: ReceiverEvent) {
        let channel_id = event.body.str_field("channel_id").unwrap_or_default().to_string();
        let user_id = event.body.str_field("user_id").unwrap_or_default().to_string();

        // Slash commands expect an empty acknowledgment before the reply.
        let _ = (event.ack)(None).await;

        let packet = SlackPrivateReply {
            bot_token: ctx.bot_token.map(String::from),
            channel_id,
            user_id,
            message: GREET_REPLY_TEXT.to_string(),
        };
        reply_private_message(ctx.client, &packet).await;
    }
}
