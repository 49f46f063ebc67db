//! Integration tests for the records queue query.

mod common;

use common::{insert_diff, insert_diff_in_ns, insert_membership, insert_reviewed_diff, ts};
use copypatrol_core::records::{RecordFilter, RecordOptions, StatusFilter};
use copypatrol_db::repositories::CopyrightDiffRepo;
use sqlx::PgPool;

fn ids(records: &[copypatrol_db::models::copyright_diff::CopyrightDiffRecord]) -> Vec<i64> {
    records.iter().map(|r| r.ithenticate_id).collect()
}

fn filter(options: RecordOptions) -> RecordFilter {
    RecordFilter::from_options(&options).unwrap()
}

// ---------------------------------------------------------------------------
// Test: no options returns everything after the cutoff, newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_default_listing_orders_newest_first(pool: PgPool) {
    insert_diff(&pool, 1, "Alpha", ts(2017, 1, 1)).await;
    insert_diff(&pool, 2, "Beta", ts(2018, 1, 1)).await;
    insert_diff(&pool, 3, "Gamma", ts(2016, 6, 1)).await; // before cutoff

    let records = CopyrightDiffRepo::list_records(&pool, &RecordFilter::default(), 50)
        .await
        .unwrap();

    assert_eq!(ids(&records), vec![2, 1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_table_returns_empty_vec(pool: PgPool) {
    let records = CopyrightDiffRepo::list_records(&pool, &RecordFilter::default(), 50)
        .await
        .unwrap();
    assert!(records.is_empty());
}

// ---------------------------------------------------------------------------
// Test: status filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_filters(pool: PgPool) {
    insert_diff(&pool, 1, "Open page", ts(2017, 1, 1)).await;
    insert_reviewed_diff(&pool, 2, "Reviewed page", "fixed", "Alice", ts(2017, 2, 1)).await;

    let reviewed = RecordFilter {
        status: StatusFilter::Reviewed,
        ..RecordFilter::default()
    };
    let records = CopyrightDiffRepo::list_records(&pool, &reviewed, 50)
        .await
        .unwrap();
    assert_eq!(ids(&records), vec![2]);
    assert!(records.iter().all(|r| r.status.is_some()));

    let open = RecordFilter {
        status: StatusFilter::Open,
        ..RecordFilter::default()
    };
    let records = CopyrightDiffRepo::list_records(&pool, &open, 50).await.unwrap();
    assert_eq!(ids(&records), vec![1]);
    assert!(records.iter().all(|r| r.status.is_none()));

    let all = filter(RecordOptions {
        filter: Some("all".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &all, 50).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_user_is_exact_match(pool: PgPool) {
    insert_reviewed_diff(&pool, 1, "A", "fixed", "Alice", ts(2017, 1, 1)).await;
    insert_reviewed_diff(&pool, 2, "B", "false", "Alicia", ts(2017, 1, 1)).await;

    let f = filter(RecordOptions {
        filter_user: Some("Alice".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &f, 50).await.unwrap();
    assert_eq!(ids(&records), vec![1]);
}

// ---------------------------------------------------------------------------
// Test: last_id cursor and limit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_last_id_pagination_respects_limit(pool: PgPool) {
    for (i, id) in [90_i64, 95, 99, 100, 150].iter().enumerate() {
        insert_diff(&pool, *id, &format!("Page {id}"), ts(2017, 1, 1 + i as u32)).await;
    }

    let f = filter(RecordOptions {
        last_id: Some("100".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &f, 2).await.unwrap();

    assert_eq!(ids(&records), vec![99, 95]);
    assert!(records.iter().all(|r| r.ithenticate_id < 100));
    assert!(records[0].diff_timestamp >= records[1].diff_timestamp);
}

// ---------------------------------------------------------------------------
// Test: drafts and WikiProjects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_drafts_only_returns_draft_namespace(pool: PgPool) {
    insert_diff(&pool, 1, "Article", ts(2017, 1, 1)).await;
    insert_diff_in_ns(&pool, 2, "Draft idea", 118, ts(2017, 1, 2)).await;

    let f = filter(RecordOptions {
        drafts: Some("1".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &f, 50).await.unwrap();
    assert_eq!(ids(&records), vec![2]);
    assert_eq!(records[0].page_ns, 118);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wikiprojects_restrict_without_duplicates(pool: PgPool) {
    insert_diff(&pool, 1, "Aspirin", ts(2017, 1, 1)).await;
    insert_diff(&pool, 2, "Quark", ts(2017, 1, 2)).await;
    insert_diff(&pool, 3, "Medical_physics", ts(2017, 1, 3)).await;
    insert_diff(&pool, 4, "Painting", ts(2017, 1, 4)).await;

    insert_membership(&pool, "Aspirin", "WikiProject_Medicine").await;
    insert_membership(&pool, "Quark", "WikiProject_Physics").await;
    insert_membership(&pool, "Medical_physics", "WikiProject_Medicine").await;
    insert_membership(&pool, "Medical_physics", "WikiProject_Physics").await;
    insert_membership(&pool, "Painting", "WikiProject_Visual_arts").await;

    let f = filter(RecordOptions {
        wikiprojects: Some("Medicine|Physics".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &f, 50).await.unwrap();

    assert_eq!(ids(&records), vec![3, 2, 1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wikiproject_names_with_spaces(pool: PgPool) {
    insert_diff(&pool, 1, "Painting", ts(2017, 1, 1)).await;
    insert_membership(&pool, "Painting", "WikiProject_Visual_arts").await;

    let f = filter(RecordOptions {
        wikiprojects: Some("Visual arts".into()),
        ..RecordOptions::default()
    });
    let records = CopyrightDiffRepo::list_records(&pool, &f, 50).await.unwrap();
    assert_eq!(ids(&records), vec![1]);
}
