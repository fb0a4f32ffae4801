//! Sample functions with deliberate flaws, kept as input for code-review tooling.
//!
//! The fixture functions live in [`fibonacci`], [`user_data`] and [`divide`].
//! [`issues`] lists the flaws a reviewer is expected to report and [`graph`]
//! describes how the fixture functions call each other.

pub mod divide;
pub mod error;
pub mod export;
pub mod fibonacci;
pub mod graph;
pub mod issues;
pub mod secrets;
pub mod user_data;

pub use error::{FixtureError, Result};
