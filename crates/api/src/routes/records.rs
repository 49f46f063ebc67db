//! Route definitions for the review queue.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Records routes, registered as `/records`.
///
/// ```text
/// GET    /                              list_records
/// GET    /{ithenticate_id}              get_record
/// POST   /{ithenticate_id}/review       review_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list_records))
        .route("/{ithenticate_id}", get(records::get_record))
        .route("/{ithenticate_id}/review", post(records::review_record))
}
