//! Slack Web API client
//!
//! The [`SlackApi`] trait is the seam between reply actions and the
//! network; the [`SlackClient`] implementation talks to the real Slack
//! Web API over reqwest. Tests substitute a recording double.

use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// The Slack Web API capabilities the bot consumes.
///
/// Every call takes the credential from the reply packet; a `None`
/// token is sent as an empty bearer and simply fails at Slack's end.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// `chat.postMessage`, threaded under `thread_ts`.
    async fn post_message(
        &self,
        token: Option<&str>,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackClientError>;

    /// `reactions.add` on the message at `timestamp`.
    async fn add_reaction(
        &self,
        token: Option<&str>,
        name: &str,
        channel: &str,
        timestamp: &str,
    ) -> Result<(), SlackClientError>;

    /// `chat.postEphemeral`, visible only to `user`.
    async fn post_ephemeral(
        &self,
        token: Option<&str>,
        channel: &str,
        text: &str,
        user: &str,
    ) -> Result<(), SlackClientError>;
}

/// HTTP client for the Slack Web API.
pub struct SlackClient {
    client: reqwest::Client,
}

impl SlackClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body to a Web API method and check the `ok` flag in
    /// the response envelope.
    async fn call_api(
        &self,
        token: Option<&str>,
        method: &str,
        body: &Value,
    ) -> Result<Value, SlackClientError> {
        trace!(method = %method, "Calling Slack API");

        let response = self
            .client
            .post(format!("{SLACK_API_BASE}/{method}"))
            .header(
                "Authorization",
                format!("Bearer {}", token.unwrap_or_default()),
            )
            .header("Content-Type", "application/json; charset=utf-8")
            .json(body)
            .send()
            .await
            .map_err(SlackClientError::Request)?;

        let body = response.text().await.map_err(SlackClientError::Request)?;

        let result: Value = serde_json::from_str(&body).map_err(|e| SlackClientError::Parse {
            body: body.clone(),
            error: e,
        })?;

        if result["ok"].as_bool() != Some(true) {
            let error = result["error"].as_str().unwrap_or("unknown").to_string();
            return Err(SlackClientError::Api { error });
        }

        Ok(result)
    }
}

impl Default for SlackClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn post_message(
        &self,
        token: Option<&str>,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackClientError> {
        self.call_api(
            token,
            "chat.postMessage",
            &serde_json::json!({
                "channel": channel,
                "thread_ts": thread_ts,
                "text": text
            }),
        )
        .await?;
        Ok(())
    }

    async fn add_reaction(
        &self,
        token: Option<&str>,
        name: &str,
        channel: &str,
        timestamp: &str,
    ) -> Result<(), SlackClientError> {
        let result = self
            .call_api(
                token,
                "reactions.add",
                &serde_json::json!({
                    "name": name,
                    "channel": channel,
                    "timestamp": timestamp
                }),
            )
            .await;

        // A repeated reaction on the same message is not a failure.
        match result {
            Err(SlackClientError::Api { ref error }) if error == "already_reacted" => Ok(()),
            Err(e) => Err(e),
            Ok(_) => Ok(()),
        }
    }

    async fn post_ephemeral(
        &self,
        token: Option<&str>,
        channel: &str,
        text: &str,
        user: &str,
    ) -> Result<(), SlackClientError> {
        self.call_api(
            token,
            "chat.postEphemeral",
            &serde_json::json!({
                "channel": channel,
                "text": text,
                "user": user
            }),
        )
        .await?;
        Ok(())
    }
}

/// Errors that can occur when calling the Slack Web API.
#[derive(Debug, thiserror::Error)]
pub enum SlackClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}, body: {body}")]
    Parse {
        body: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Slack API error: {error}")]
    Api { error: String },
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;

        #[test]
        fn test_client_creation() {
            let _client = SlackClient::new();
            // Just verify it doesn't panic
        }

        #[test]
        fn test_api_error_display() {
            let err = SlackClientError::Api {
                error: "channel_not_found".to_string(),
            };
            assert_eq!(err.to_string(), "Slack API error: channel_not_found");
        }
    }
}
