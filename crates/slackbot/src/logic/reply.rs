//! Reply actions
//!
//! Best-effort side effects: each performs exactly one call through
//! the injected [`SlackApi`] and swallows failures. A dropped reply
//! must never change the HTTP acknowledgment returned to Slack, so
//! errors are logged here and not propagated.

use tracing::error;

use crate::logic::client::SlackApi;
use crate::types::{SlackPrivateReply, SlackReactionReply, SlackReply};

/// Post a threaded message to the packet's channel.
pub async fn reply_message(client: &dyn SlackApi, packet: &SlackReply) {
    if let Err(e) = client
        .post_message(
            packet.bot_token.as_deref(),
            &packet.channel_id,
            &packet.thread_timestamp,
            &packet.message,
        )
        .await
    {
        error!(error = %e, channel = %packet.channel_id, "Failed to post threaded message");
    }
}

/// Add a reaction to the message the packet points at.
pub async fn reply_reaction(client: &dyn SlackApi, packet: &SlackReactionReply) {
    if let Err(e) = client
        .add_reaction(
            packet.bot_token.as_deref(),
            &packet.reaction,
            &packet.channel_id,
            &packet.thread_timestamp,
        )
        .await
    {
        error!(error = %e, channel = %packet.channel_id, "Failed to add reaction");
    }
}

/// Post an ephemeral message visible only to the packet's user.
pub async fn reply_private_message(client: &dyn SlackApi, packet: &SlackPrivateReply) {
    if let Err(e) = client
        .post_ephemeral(
            packet.bot_token.as_deref(),
            &packet.channel_id,
            &packet.message,
            &packet.user_id,
        )
        .await
    {
        error!(error = %e, channel = %packet.channel_id, "Failed to post ephemeral message");
    }
}
