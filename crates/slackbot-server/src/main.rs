//! Webhook server binary
//!
//! Loads the environment, configures logging, constructs the Slack
//! client and the app with its default handler bindings once, and
//! serves the webhook route.

use std::sync::Arc;

use shared::env::configure_env;
use shared::logging::configure_logging;
use slackbot::{App, SlackClient, SlackConfiguration};
use tracing::warn;

mod server;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    configure_env()?;
    configure_logging()?;

    let config = SlackConfiguration::from_env();
    if config.bot_token.is_none() {
        // Not fatal: the webhook still acknowledges events, replies
        // just fail at Slack's end until the token is provided.
        warn!("SLACK_BOT_TOKEN is not set; replies will be dropped");
    }

    let client = Arc::new(SlackClient::new());
    let app = Arc::new(App::with_default_handlers(client, config));

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    server::start_axum_server(server::StartAxumServerParams { host, port, app }).await?;

    Ok(())
}
