//! Core facade unit tests.

/// Stepping, decode failures and fault reporting.
pub mod core;
