//! Webhook HTTP endpoints
//!
//! Provides the single webhook route Slack calls, plus the pure entry
//! function it delegates to.

mod webhook;

pub use webhook::{create_router, handle_event, WEBHOOK_PATH};
