//! Domain types, constants and pure rules for the CopyPatrol review service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod error;
pub mod leaderboard;
pub mod records;
pub mod review;
pub mod types;
pub mod wikiproject;
