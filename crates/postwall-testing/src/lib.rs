//! Testing infrastructure for postwall integration tests.
//!
//! Provides fixture builders for the three backend snapshots so tests
//! across the workspace assemble consistent posts, authors, and
//! settings without repeating wire details.

pub mod fixtures;

pub use fixtures::*;
