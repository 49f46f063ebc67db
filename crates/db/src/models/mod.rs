//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any `Deserialize` DTOs the API accepts for it.

pub mod copyright_diff;
pub mod leaderboard;
pub mod wikiproject;
