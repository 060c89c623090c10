//! Cross-cutting concerns shared by the slackbot crates:
//! logging bootstrap, environment loading, and common error types.

pub mod env;
pub mod error;
pub mod logging;
