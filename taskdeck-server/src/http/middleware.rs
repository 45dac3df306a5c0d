//! Request middleware

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};

use super::envelope::Envelope;
use super::error::ErrorDetails;
use super::server::AppState;

/// Log timestamp, method and path for every inbound request, then pass it on.
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(
        at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        method = %req.method(),
        path = %req.uri().path(),
        "request"
    );
    next.run(req).await
}

/// Re-render 500 envelopes with their raw error text when the server is
/// configured to expose it.
pub async fn attach_error_details(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    let Some(ErrorDetails(details)) = response.extensions_mut().remove::<ErrorDetails>() else {
        return response;
    };
    if !state.expose_error_details {
        return response;
    }

    let envelope = Envelope::failure("Internal server error").with_details(details);
    (response.status(), Json(envelope)).into_response()
}
