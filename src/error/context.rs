//! Error context utilities for kitscan
//!
//! Helpers for attaching paths and messages to lower-level errors so that
//! every failure reaching the user names the file or setting it is about.

use crate::error::{KitScanError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T> {
    /// Turn the error into a configuration error prefixed with `context`
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| KitScanError::Config {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for IO results produced while reading project files
pub trait IoResultExt<T> {
    /// Attach the path of the file being read
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;

    /// Attach the path of the directory being listed
    fn with_dir_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| KitScanError::file_read(path.as_ref(), err))
    }

    fn with_dir_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| KitScanError::directory_read(path.as_ref(), err))
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> KitScanError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> KitScanError,
    {
        self.ok_or_else(err_fn)
    }
}
