//! Test doubles shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::logic::client::{SlackApi, SlackClientError};

/// One recorded Slack API invocation, with every argument captured.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    PostMessage {
        token: Option<String>,
        channel: String,
        thread_ts: String,
        text: String,
    },
    AddReaction {
        token: Option<String>,
        name: String,
        channel: String,
        timestamp: String,
    },
    PostEphemeral {
        token: Option<String>,
        channel: String,
        text: String,
        user: String,
    },
}

/// A recording [`SlackApi`] double. In failing mode every call still
/// records its arguments but returns an API error.
pub struct MockSlackApi {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl MockSlackApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), SlackClientError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(SlackClientError::Api {
                error: "mock_failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SlackApi for MockSlackApi {
    async fn post_message(
        &self,
        token: Option<&str>,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), SlackClientError> {
        self.record(RecordedCall::PostMessage {
            token: token.map(String::from),
            channel: channel.to_string(),
            thread_ts: thread_ts.to_string(),
            text: text.to_string(),
        })
    }

    async fn add_reaction(
        &self,
        token: Option<&str>,
        name: &str,
        channel: &str,
        timestamp: &str,
    ) -> Result<(), SlackClientError> {
        self.record(RecordedCall::AddReaction {
            token: token.map(String::from),
            name: name.to_string(),
            channel: channel.to_string(),
            timestamp: timestamp.to_string(),
        })
    }

    async fn post_ephemeral(
        &self,
        token: Option<&str>,
        channel: &str,
        text: &str,
        user: &str,
    ) -> Result<(), SlackClientError> {
        self.record(RecordedCall::PostEphemeral {
            token: token.map(String::from),
            channel: channel.to_string(),
            text: text.to_string(),
            user: user.to_string(),
        })
    }
}
