//! Slack webhook route
//!
//! Receives Slack Events API webhooks. URL verification challenges are
//! echoed back immediately; everything else is wrapped into a receiver
//! event and forwarded to the app, and the request is acknowledged
//! with 200 regardless of whether any binding fired.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use http::{HeaderMap, StatusCode, header};
use tracing::trace;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::logic::dispatcher::App;
use crate::logic::event::generate_receiver_event;
use crate::logic::event::is_url_verification_request;
use crate::logic::parser::parse_request_body;
use crate::types::HandlerResponse;

pub const WEBHOOK_PATH: &str = "/slack/events";

/// Creates the webhook router.
pub fn create_router() -> OpenApiRouter<Arc<App>> {
    OpenApiRouter::new().routes(routes!(route_slack_webhook))
}

/// The webhook state machine, independent of the HTTP transport.
///
/// Parse the body, short-circuit handshakes with the echoed challenge,
/// otherwise adapt and dispatch. Every documented flow returns 200;
/// reply failures are logged inside the reply actions and never
/// surface here.
pub async fn handle_event(
    app: &App,
    body: Option<&str>,
    content_type: Option<&str>,
) -> HandlerResponse {
    let payload = parse_request_body(body, content_type);

    if is_url_verification_request(&payload) {
        trace!("Responding to Slack URL verification challenge");
        return HandlerResponse {
            status_code: 200,
            body: payload.str_field("challenge").unwrap_or_default().to_string(),
        };
    }

    let event = generate_receiver_event(payload);
    app.process_event(event).await;

    HandlerResponse {
        status_code: 200,
        body: String::new(),
    }
}

/// POST /slack/events - Slack webhook endpoint
#[utoipa::path(
    post,
    path = "/slack/events",
    tags = ["slack"],
    request_body = String,
    responses(
        (status = 200, description = "Event acknowledged", body = String),
    ),
    summary = "Slack webhook endpoint",
    description = "Receives Slack Events API webhooks. Returns the URL verification challenge \
                   during app setup, or acknowledges the event after dispatching it to the \
                   registered handlers.",
    operation_id = "slack-webhook",
)]
pub async fn route_slack_webhook(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let response = handle_event(&app, Some(&body), content_type).await;

    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK);
    (status, response.body)
}
