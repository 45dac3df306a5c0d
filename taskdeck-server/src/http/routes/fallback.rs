//! JSON 404 for anything the router doesn't match

use axum::http::{StatusCode, Uri};
use axum::Json;

use crate::http::envelope::Envelope;

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failure("Route not found").with_path(uri.path())),
    )
}
