//! Handlers for the review queue: listing, single-record lookup and
//! recording a verdict.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use copypatrol_core::error::CoreError;
use copypatrol_core::records::{clamp_limit, RecordFilter, RecordOptions};
use copypatrol_core::review::{validate_review_status, validate_reviewer};
use copypatrol_core::types::DbId;
use copypatrol_db::models::copyright_diff::{
    CopyrightDiffRecord, CreateAssessment, RecordWithWikiProjects,
};
use copypatrol_db::repositories::{CopyrightDiffRepo, WikiProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a record or fail with 404.
async fn find_record(pool: &sqlx::PgPool, ithenticate_id: DbId) -> AppResult<CopyrightDiffRecord> {
    CopyrightDiffRepo::find_by_ithenticate_id(pool, ithenticate_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CopyrightDiff",
                id: ithenticate_id,
            })
        })
}

/// GET /records
///
/// List the review queue. Accepts `limit`, `filter`, `filter_user`,
/// `last_id`, `drafts` and `wikiprojects`. Each record carries the
/// WikiProjects its page belongs to.
pub async fn list_records(
    State(state): State<AppState>,
    ApiQuery(options): ApiQuery<RecordOptions>,
) -> AppResult<impl IntoResponse> {
    let filter = RecordFilter::from_options(&options)?;
    let limit = clamp_limit(options.limit);

    let records = CopyrightDiffRepo::list_records(&state.pool, &filter, limit).await?;

    let titles: Vec<String> = records.iter().map(|r| r.page_title.clone()).collect();
    let projects = WikiProjectRepo::projects_for_pages(&state.pool, &titles).await?;

    let data: Vec<RecordWithWikiProjects> = records
        .into_iter()
        .map(|record| {
            let wikiprojects = projects.get(&record.page_title).cloned().unwrap_or_default();
            RecordWithWikiProjects {
                record,
                wikiprojects,
            }
        })
        .collect();

    tracing::debug!(count = data.len(), limit, "Listed records");

    Ok(Json(DataResponse { data }))
}

/// GET /records/{ithenticate_id}
pub async fn get_record(
    State(state): State<AppState>,
    ApiPath(ithenticate_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = find_record(&state.pool, ithenticate_id).await?;
    Ok(Json(DataResponse { data: record }))
}

/// POST /records/{ithenticate_id}/review
///
/// Record a verdict on an unreviewed record. Returns 404 for an unknown
/// record and 409 if someone else already reviewed it.
pub async fn review_record(
    State(state): State<AppState>,
    ApiPath(ithenticate_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CreateAssessment>,
) -> AppResult<impl IntoResponse> {
    validate_review_status(&input.status)?;
    let user = input.user.trim();
    validate_reviewer(user)?;

    let updated = CopyrightDiffRepo::insert_assessment(
        &state.pool,
        ithenticate_id,
        &input.status,
        user,
        Utc::now(),
    )
    .await?;

    if !updated {
        let existing = find_record(&state.pool, ithenticate_id).await?;
        if existing.review_state().accepts_assessment() {
            return Err(AppError::InternalError(format!(
                "Assessment on record {ithenticate_id} was not applied"
            )));
        }
        tracing::warn!(
            ithenticate_id,
            user,
            reviewed_by = existing.status_user.as_deref().unwrap_or_default(),
            "Rejected assessment on already reviewed record"
        );
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Record {ithenticate_id} was already reviewed by {}",
            existing.status_user.as_deref().unwrap_or("another reviewer")
        ))));
    }

    tracing::info!(
        ithenticate_id,
        user,
        status = %input.status,
        "Assessment recorded"
    );

    let record = find_record(&state.pool, ithenticate_id).await?;
    Ok(Json(DataResponse { data: record }))
}
