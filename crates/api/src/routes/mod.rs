pub mod health;
pub mod leaderboard;
pub mod records;
pub mod wikiprojects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /records                               list review queue
/// /records/{ithenticate_id}              single record
/// /records/{ithenticate_id}/review       record a verdict (POST)
///
/// /wikiprojects?title=                   WikiProjects for a page
///
/// /leaderboard                           top reviewers per window
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/records", records::router())
        .nest("/wikiprojects", wikiprojects::router())
        .nest("/leaderboard", leaderboard::router())
}
