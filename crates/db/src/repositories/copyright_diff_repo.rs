//! Repository for the `copyright_diffs` table.

use copypatrol_core::records::{RecordFilter, StatusFilter, DRAFT_NAMESPACE};
use copypatrol_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::copyright_diff::CopyrightDiffRecord;

/// Column list for `copyright_diffs` SELECT queries.
const COLUMNS: &str = "\
    id, ithenticate_id, lang, project, page_ns, page_title, \
    rev_id, rev_parent_id, rev_user_text, diff_timestamp, \
    status, status_user, review_timestamp";

/// Provides queue queries and the review mutation for copyright diffs.
pub struct CopyrightDiffRepo;

impl CopyrightDiffRepo {
    /// List records matching `filter`, newest diff first, at most `limit` rows.
    ///
    /// Returns an empty vector when nothing matches.
    pub async fn list_records(
        pool: &PgPool,
        filter: &RecordFilter,
        limit: i64,
    ) -> Result<Vec<CopyrightDiffRecord>, sqlx::Error> {
        let (query, bind_values) = build_records_query(filter, limit);

        tracing::debug!(
            predicates = bind_values.len(),
            limit,
            "Listing copyright diff records"
        );

        let mut q = sqlx::query_as::<_, CopyrightDiffRecord>(&query);
        for val in &bind_values {
            q = match val {
                BindValue::BigInt(v) => q.bind(*v),
                BindValue::Int(v) => q.bind(*v),
                BindValue::Text(v) => q.bind(v.as_str()),
                BindValue::TextArray(v) => q.bind(v.as_slice()),
                BindValue::Timestamp(v) => q.bind(*v),
            };
        }
        q.fetch_all(pool).await
    }

    /// Find a record by its iThenticate report id.
    pub async fn find_by_ithenticate_id(
        pool: &PgPool,
        ithenticate_id: DbId,
    ) -> Result<Option<CopyrightDiffRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM copyright_diffs WHERE ithenticate_id = $1");
        sqlx::query_as::<_, CopyrightDiffRecord>(&query)
            .bind(ithenticate_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a verdict on an unreviewed record.
    ///
    /// Verdict, reviewer and timestamp are written in one statement, and only
    /// while `status` is still NULL. Returns `true` iff a row changed; `false`
    /// means the record does not exist or was already reviewed.
    pub async fn insert_assessment(
        pool: &PgPool,
        ithenticate_id: DbId,
        status: &str,
        user: &str,
        reviewed_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE copyright_diffs SET \
                status = $1, status_user = $2, review_timestamp = $3 \
             WHERE ithenticate_id = $4 AND status IS NULL",
        )
        .bind(status)
        .bind(user)
        .bind(reviewed_at)
        .bind(ithenticate_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for the dynamically-built records query.
#[derive(Debug, Clone, PartialEq)]
enum BindValue {
    BigInt(i64),
    Int(i32),
    Text(String),
    TextArray(Vec<String>),
    Timestamp(Timestamp),
}

/// Build the records SELECT and its positional bind values.
///
/// Only options present in `filter` contribute predicates. WikiProject
/// membership is an `EXISTS` semi-join so a page in several requested
/// projects still yields one row.
fn build_records_query(filter: &RecordFilter, limit: i64) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<BindValue> = Vec::new();
    let mut bind_idx = 1u32;

    conditions.push(format!("diff_timestamp > ${bind_idx}"));
    bind_idx += 1;
    bind_values.push(BindValue::Timestamp(filter.min_diff_timestamp));

    match filter.status {
        StatusFilter::Open => conditions.push("status IS NULL".to_string()),
        StatusFilter::Reviewed => conditions.push("status IS NOT NULL".to_string()),
        StatusFilter::All => {}
    }

    if let Some(ref reviewer) = filter.reviewer {
        conditions.push(format!("status_user = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(reviewer.clone()));
    }

    if let Some(last_id) = filter.before_ithenticate_id {
        conditions.push(format!("ithenticate_id < ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(last_id));
    }

    if filter.drafts_only {
        conditions.push(format!("page_ns = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Int(DRAFT_NAMESPACE));
    }

    if !filter.wikiprojects.is_empty() {
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM wikiprojects wp \
             WHERE wp.wp_page_title = copyright_diffs.page_title \
             AND wp.wp_project = ANY(${bind_idx}))"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::TextArray(filter.wikiprojects.clone()));
    }

    let query = format!(
        "SELECT {COLUMNS} FROM copyright_diffs \
         WHERE {} \
         ORDER BY diff_timestamp DESC, ithenticate_id DESC \
         LIMIT ${bind_idx}",
        conditions.join(" AND ")
    );
    bind_values.push(BindValue::BigInt(limit));

    (query, bind_values)
}
