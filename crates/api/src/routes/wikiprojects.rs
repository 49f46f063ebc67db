use axum::routing::get;
use axum::Router;

use crate::handlers::wikiprojects;
use crate::state::AppState;

/// WikiProject lookup, registered as `/wikiprojects`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(wikiprojects::list_for_page))
}
