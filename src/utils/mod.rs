//! Utility functions module
//!
//! Output formatting helpers shared by the CLI.

pub mod format;

pub use format::*;
