//! Event classification and the canonical receiver event
//!
//! The classifier decides whether a payload is Slack's URL
//! verification handshake. The adapter wraps everything else into a
//! [`ReceiverEvent`]: the parsed body plus a deferred acknowledgment
//! capability the dispatch cycle hands to whichever handler matches.

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::types::{HandlerResponse, ParsedPayload, URL_VERIFICATION_TYPE};

/// The one-shot acknowledgment capability carried by a receiver event.
///
/// `FnOnce` makes a second invocation a move error rather than a
/// runtime check; the platform only expects a single acknowledgment
/// per event anyway.
pub type AckFn = Box<dyn FnOnce(Option<String>) -> BoxFuture<'static, HandlerResponse> + Send>;

/// The canonical in-flight event: one per dispatch cycle, never shared
/// across requests.
pub struct ReceiverEvent {
    pub body: ParsedPayload,
    pub ack: AckFn,
}

/// True iff the payload carries `type == "url_verification"`.
///
/// Any other shape, including [`ParsedPayload::Empty`], is false.
pub fn is_url_verification_request(payload: &ParsedPayload) -> bool {
    payload.str_field("type") == Some(URL_VERIFICATION_TYPE)
}

/// Wrap a parsed payload into the canonical event shape the dispatcher
/// consumes. Acknowledging resolves to a 200 whose body is the given
/// response, or empty when none is supplied.
pub fn generate_receiver_event(payload: ParsedPayload) -> ReceiverEvent {
    ReceiverEvent {
        body: payload,
        ack: Box::new(|response| {
            async move {
                HandlerResponse {
                    status_code: 200,
                    body: response.unwrap_or_default(),
                }
            }
            .boxed()
        }),
    }
}

#[cfg(test)]
mod tests {
    mod unit {
        use super::super::*;
        use serde_json::json;

        #[test]
        fn test_url_verification_is_classified() {
            let payload = ParsedPayload::Json(json!({"type": "url_verification"}));
            assert!(is_url_verification_request(&payload));
        }

        #[test]
        fn test_other_event_type_is_not_classified() {
            let payload = ParsedPayload::Json(json!({"type": "some_other_event"}));
            assert!(!is_url_verification_request(&payload));
        }

        #[test]
        fn test_payload_without_type_is_not_classified() {
            let payload = ParsedPayload::Json(json!({"body": "demo", "header": "slack"}));
            assert!(!is_url_verification_request(&payload));
        }

        #[test]
        fn test_empty_payload_is_not_classified() {
            assert!(!is_url_verification_request(&ParsedPayload::Empty));
        }

        #[test]
        fn test_non_string_type_is_not_classified() {
            let payload = ParsedPayload::Json(json!({"type": 42}));
            assert!(!is_url_verification_request(&payload));
        }

        #[tokio::test]
        async fn test_ack_without_response_resolves_to_empty_200() {
            let event = generate_receiver_event(ParsedPayload::Empty);
            let response = (event.ack)(None).await;
            assert_eq!(
                response,
                HandlerResponse {
                    status_code: 200,
                    body: String::new(),
                }
            );
        }

        #[tokio::test]
        async fn test_ack_with_response_echoes_it() {
            let event = generate_receiver_event(ParsedPayload::Empty);
            let response = (event.ack)(Some("mock response".to_string())).await;
            assert_eq!(
                response,
                HandlerResponse {
                    status_code: 200,
                    body: "mock response".to_string(),
                }
            );
        }

        #[test]
        fn test_receiver_event_carries_payload() {
            let payload = ParsedPayload::Json(json!({"event": {"type": "message"}}));
            let event = generate_receiver_event(payload.clone());
            assert_eq!(event.body, payload);
        }
    }
}
