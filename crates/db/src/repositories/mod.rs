//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod copyright_diff_repo;
pub mod leaderboard_repo;
pub mod wikiproject_repo;

pub use copyright_diff_repo::CopyrightDiffRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use wikiproject_repo::WikiProjectRepo;
