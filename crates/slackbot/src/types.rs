//! Type definitions for the webhook pipeline: the parsed payload
//! union, reply packets, configuration, and the default bot literals.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Slash command the bot responds to.
pub const GREET_COMMAND: &str = "/greet";

/// Reaction added to every inbound user message.
pub const DEFAULT_REACTION: &str = "robot_face";

/// Threaded reply sent after the reaction.
pub const AUTO_REPLY_TEXT: &str = "Hello :wave:";

/// Ephemeral reply to the `/greet` command.
pub const GREET_REPLY_TEXT: &str = "Greetings, user!";

/// Marker value Slack sends on URL verification handshakes.
pub const URL_VERIFICATION_TYPE: &str = "url_verification";

/// Process-wide configuration, loaded once at startup.
///
/// Absent values are passed through rather than validated here; a
/// missing bot token surfaces as failed Slack API calls, not as a
/// startup error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackConfiguration {
    /// Bot token for authenticating with the Slack API (starts with xoxb-)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,

    /// Signing secret for webhook request verification (consumed by the
    /// transport collaborator, carried here untouched)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_secret: Option<String>,
}

impl SlackConfiguration {
    /// Build the configuration from `SLACK_BOT_TOKEN` and
    /// `SLACK_SIGNING_SECRET`.
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("SLACK_BOT_TOKEN").ok(),
            signing_secret: std::env::var("SLACK_SIGNING_SECRET").ok(),
        }
    }
}

/// A request body normalized by the body parser.
///
/// Wire bodies arrive either as JSON or as `&`-delimited form pairs;
/// anything malformed degrades to [`ParsedPayload::Empty`]. Consumers
/// pattern-match rather than trust-cast.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedPayload {
    /// A decoded JSON document (usually an object, but any JSON value).
    Json(Value),
    /// A flat form-encoded mapping; values are always strings.
    Form(Map<String, Value>),
    /// The canonical result of absent or malformed input.
    Empty,
}

impl ParsedPayload {
    /// Look up a top-level field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            ParsedPayload::Json(Value::Object(map)) => map.get(key),
            ParsedPayload::Form(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up a top-level field expected to be a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    /// The inner `event` object of an event_callback envelope, if any.
    pub fn event(&self) -> Option<&Map<String, Value>> {
        self.field("event").and_then(Value::as_object)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedPayload::Empty)
    }
}

/// The only value the HTTP entry point may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

/// Packet for a threaded channel reply.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackReply {
    pub bot_token: Option<String>,
    pub channel_id: String,
    pub thread_timestamp: String,
    pub message: String,
}

/// Packet for adding a reaction to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackReactionReply {
    pub bot_token: Option<String>,
    pub channel_id: String,
    pub thread_timestamp: String,
    pub reaction: String,
}

/// Packet for an ephemeral reply, visible only to `user_id`.
/// Ephemeral replies are user-scoped, not thread-scoped.
#[derive(Debug, Clone, PartialEq)]
pub struct SlackPrivateReply {
    pub bot_token: Option<String>,
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
}
