//! Repository for the read-only `wikiprojects` table.

use std::collections::HashMap;

use copypatrol_core::wikiproject::collect_display_names;
use sqlx::PgPool;

use crate::models::wikiproject::WikiProjectMembership;

/// Provides WikiProject membership lookups by page title.
pub struct WikiProjectRepo;

impl WikiProjectRepo {
    /// Raw membership rows for a page, including partnership projects.
    pub async fn list_for_page(
        pool: &PgPool,
        page_title: &str,
    ) -> Result<Vec<WikiProjectMembership>, sqlx::Error> {
        sqlx::query_as::<_, WikiProjectMembership>(
            "SELECT wp_page_title, wp_project FROM wikiprojects \
             WHERE wp_page_title = $1",
        )
        .bind(page_title)
        .fetch_all(pool)
        .await
    }

    /// Sorted, de-duplicated WikiProject names for a page.
    ///
    /// Partnership projects are dropped and subprojects collapse into their
    /// parent. Returns an empty vector when the page has no WikiProjects.
    pub async fn projects_for_page(
        pool: &PgPool,
        page_title: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows = Self::list_for_page(pool, page_title).await?;
        Ok(collect_display_names(rows.iter().map(|r| &r.wp_project)))
    }

    /// [`Self::projects_for_page`] for many pages in one round-trip.
    ///
    /// Pages without any WikiProject are absent from the returned map.
    pub async fn projects_for_pages(
        pool: &PgPool,
        page_titles: &[String],
    ) -> Result<HashMap<String, Vec<String>>, sqlx::Error> {
        if page_titles.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, WikiProjectMembership>(
            "SELECT wp_page_title, wp_project FROM wikiprojects \
             WHERE wp_page_title = ANY($1)",
        )
        .bind(page_titles)
        .fetch_all(pool)
        .await?;

        let mut raw: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            raw.entry(row.wp_page_title).or_default().push(row.wp_project);
        }

        Ok(raw
            .into_iter()
            .map(|(title, projects)| (title, collect_display_names(projects)))
            .filter(|(_, names)| !names.is_empty())
            .collect())
    }
}
