//! Fixture-driven regression testing for narralens.
//!
//! This crate provides a test harness where classification cases are
//! defined declaratively in TOML fixture files: each case holds one input
//! sentence plus the subset of output columns it pins down. Expectation
//! fields a case leaves unset are not compared, so fixtures stay readable
//! and only break when a pinned column actually moves.
//!
//! ## Modules
//!
//! - [`fixture`] - The TOML case model and its input-record mapping
//! - [`loader`] - Fixture file loading and directory walking
//! - [`runner`] - Case execution and expectation diffing
//! - [`formatter`] - Failure and summary text for fixture runs
//! - [`errors`] - Error types for fixture handling

pub mod errors;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

// Re-exports for convenient access to core types
pub use errors::{FixtureError, FixtureResult};
pub use fixture::{Expectation, FixtureCase, FixtureFile};
pub use formatter::{format_failures, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_case, run_file, CaseOutcome, Divergence};
