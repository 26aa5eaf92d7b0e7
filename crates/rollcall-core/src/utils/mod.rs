//! Utility functions for string formatting and comparison.

pub mod format;

pub use format::{capitalize, cmp_ignore_case, truncate};
