//! Shared test infrastructure.

/// Fluent process construction.
pub mod builder;

/// Configuration holder and run helpers.
pub mod harness;
