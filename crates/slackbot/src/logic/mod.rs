//! Logic module for the webhook pipeline
//!
//! Contains:
//! - Body parsing and event classification (`parser`, `event`)
//! - `SlackClient` for making HTTP requests to the Slack Web API
//! - Best-effort reply actions (`reply`)
//! - The handler registry and built-in bindings (`dispatcher`)

pub mod client;
pub mod dispatcher;
pub mod event;
pub mod parser;
pub mod reply;
