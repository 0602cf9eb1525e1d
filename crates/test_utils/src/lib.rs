//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! speaker registration test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made speakers for the common registration scenarios
//! - `builders`: Builder for speakers with sensible defaults
//! - `assertions`: Assertion helpers for registration outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
