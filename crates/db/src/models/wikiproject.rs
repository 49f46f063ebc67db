use serde::Serialize;
use sqlx::FromRow;

/// A row from the `wikiprojects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WikiProjectMembership {
    pub wp_page_title: String,
    pub wp_project: String,
}
