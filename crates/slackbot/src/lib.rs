//! Slack Webhook Greeting Bot
//!
//! Receives Slack Events API webhooks over HTTP, normalizes the
//! ambiguous wire body (JSON or form-encoded) into a canonical event,
//! and dispatches it through a small handler registry to best-effort
//! reply actions.
//!
//! This crate provides:
//! - Request body parsing and event classification (`logic::parser`,
//!   `logic::event`)
//! - Message sending via the Slack Web API (`logic::client`)
//! - The handler registry and the two built-in bindings
//!   (`logic::dispatcher`)
//! - The webhook HTTP entry point (`router` module)
//!
//! ## Flow
//!
//! The webhook endpoint parses the body, echoes URL verification
//! challenges immediately, and otherwise wraps the payload in a
//! [`ReceiverEvent`] and forwards it to [`App::process_event`]. Reply
//! failures are logged and swallowed; the endpoint acknowledges with
//! 200 regardless.

pub mod logic;
pub mod router;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use logic::client::{SlackApi, SlackClient, SlackClientError};
pub use logic::dispatcher::{App, EventHandler, GreetCommand, HandlerContext, MessageAutoReply};
pub use logic::event::{AckFn, ReceiverEvent, generate_receiver_event, is_url_verification_request};
pub use logic::parser::parse_request_body;
pub use types::{
    HandlerResponse, ParsedPayload, SlackConfiguration, SlackPrivateReply, SlackReactionReply,
    SlackReply,
};
