use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use copypatrol_db::repositories::WikiProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WikiProjectParams {
    pub title: String,
}

/// GET /wikiprojects?title=
///
/// Sorted WikiProject names for a page. Empty when it has none.
pub async fn list_for_page(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<WikiProjectParams>,
) -> AppResult<impl IntoResponse> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    let names = WikiProjectRepo::projects_for_page(&state.pool, title).await?;
    Ok(Json(DataResponse { data: names }))
}
