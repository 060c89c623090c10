//! Request body parser
//!
//! Slack delivers event callbacks as JSON and slash commands as
//! URL-encoded forms, over the same webhook. This module turns either
//! shape into a [`ParsedPayload`]; every failure path degrades to
//! [`ParsedPayload::Empty`] so the entry point never faces a parse
//! error.

use serde_json::{Map, Value};

use crate::types::ParsedPayload;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Parse a raw request body using the content-type header as a hint.
///
/// - Absent or empty body: [`ParsedPayload::Empty`].
/// - JSON content-type (parameters such as `; charset=utf-8` are
///   ignored): strict JSON decode, malformed input degrades to
///   [`ParsedPayload::Empty`].
/// - Anything else is treated as an `&`-delimited form body. Pairs are
///   split on the first `=`; values are percent-decoded, with a
///   missing value or a decode failure defaulting to the empty string.
pub fn parse_request_body(body: Option<&str>, content_type: Option<&str>) -> ParsedPayload {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return ParsedPayload::Empty;
    };

    if content_type.map(media_type) == Some(JSON_MEDIA_TYPE) {
        return match serde_json::from_str::<Value>(body) {
            Ok(value) => ParsedPayload::Json(value),
            Err(_) => ParsedPayload::Empty,
        };
    }

    let mut result = Map::new();
    for pair in body.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, decode_form_value(value)),
            None => (pair, String::new()),
        };
        result.insert(key.to_string(), Value::String(value));
    }
    ParsedPayload::Form(result)
}

/// Strip any `; charset=...` style parameters from a content-type header.
fn media_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

fn decode_form_value(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_default()
}
