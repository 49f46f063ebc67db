use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use copypatrol_db::models::leaderboard::LeaderboardData;
use copypatrol_db::repositories::LeaderboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Leaderboard payload: the three windows plus the wiki base URL used to
/// link reviewer names.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub data: LeaderboardData,
    pub wiki: String,
}

/// GET /leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = LeaderboardRepo::leaderboard_data(
        &state.pool,
        &state.config.leaderboard_excluded_user,
        Utc::now(),
    )
    .await?;

    Ok(Json(LeaderboardResponse {
        data,
        wiki: state.config.wiki_base_url.clone(),
    }))
}
