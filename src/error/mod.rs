//! Error handling for kitscan
//!
//! Error types, the crate result alias, and context helpers.

pub mod context;
pub mod types;

pub use context::{IoResultExt, OptionExt, ResultExt};
pub use types::{ErrorSeverity, KitScanError, Result};
