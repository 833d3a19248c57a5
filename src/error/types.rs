//! Error types and definitions for kitscan
//!
//! Every failure in the scan pipeline is fatal for the run; the only tolerated
//! "shape" mismatch (a default export without a `components` map) never becomes
//! an error in the first place.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - the scan fails
    Error,
    /// Critical level - the configuration or environment is unusable
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for kitscan operations
#[derive(Debug, Error)]
pub enum KitScanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read (missing, unreadable, not UTF-8)
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed during classification
    #[error("Error reading directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Component file without a top-level `<script>` block
    #[error("No <script> block found in {path}")]
    MissingScriptBlock { path: PathBuf },

    /// Component file whose `<script>` block has no content
    #[error("Empty <script> block in {path}")]
    EmptyScriptBlock { path: PathBuf },

    /// Component file markup that could not be scanned
    #[error("Malformed markup in {path}: {message}")]
    MalformedMarkup { path: PathBuf, message: String },

    /// Script text that failed to parse as an ECMAScript module
    #[error("Syntax error in {path}: {}", messages.join("; "))]
    Syntax {
        path: PathBuf,
        messages: Vec<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl KitScanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KitScanError::Config { .. } => ErrorSeverity::Critical,
            KitScanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            KitScanError::ConfigRead { .. } => ErrorSeverity::Critical,
            KitScanError::ConfigParse { .. } => ErrorSeverity::Critical,
            KitScanError::GlobPattern { .. } => ErrorSeverity::Critical,
            KitScanError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            KitScanError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// The file or directory this error is about, when there is one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            KitScanError::FileRead { path, .. }
            | KitScanError::DirectoryRead { path, .. }
            | KitScanError::MissingScriptBlock { path }
            | KitScanError::EmptyScriptBlock { path }
            | KitScanError::MalformedMarkup { path, .. }
            | KitScanError::Syntax { path, .. }
            | KitScanError::InvalidPath { path }
            | KitScanError::ConfigNotFound { path }
            | KitScanError::ConfigRead { path, .. }
            | KitScanError::ConfigParse { path, .. }
            | KitScanError::OutputWrite { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            KitScanError::DirectoryRead { path, source } => {
                format!(
                    "Cannot list directory '{}': {}. Every project needs a readable 'src' directory.",
                    path.display(),
                    source
                )
            }
            KitScanError::MissingScriptBlock { path } => {
                format!(
                    "Component file '{}' has no <script> block, so its kit usage cannot be analyzed.",
                    path.display()
                )
            }
            KitScanError::EmptyScriptBlock { path } => {
                format!("Component file '{}' has an empty <script> block.", path.display())
            }
            KitScanError::Syntax { path, messages } => {
                format!(
                    "'{}' is not a valid ECMAScript module: {}",
                    path.display(),
                    messages.join("; ")
                )
            }
            KitScanError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            KitScanError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with --init or pass projects on the command line.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// A hint for the user on how to get past this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            KitScanError::DirectoryRead { .. } => {
                Some("Check that each project path points at a frontend project root containing 'src'")
            }
            KitScanError::MissingScriptBlock { .. } | KitScanError::EmptyScriptBlock { .. } => {
                Some("Add a <script> block to the component or exclude its directory with --exclude")
            }
            KitScanError::Syntax { .. } => {
                Some("Only plain JavaScript modules are supported; TypeScript and JSX sources cannot be scanned")
            }
            KitScanError::ConfigNotFound { .. } => Some("Run `kitscan --init` to create a default .kitscan.toml"),
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        KitScanError::Io { source }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KitScanError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a directory listing error
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KitScanError::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        KitScanError::Config {
            message: message.into(),
        }
    }

    /// Create a malformed markup error
    pub fn malformed_markup(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        KitScanError::MalformedMarkup {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for KitScanError {
    fn from(err: std::io::Error) -> Self {
        KitScanError::io_error(err)
    }
}

impl From<glob::PatternError> for KitScanError {
    fn from(err: glob::PatternError) -> Self {
        KitScanError::GlobPattern { source: err }
    }
}

impl From<csv::Error> for KitScanError {
    fn from(err: csv::Error) -> Self {
        KitScanError::Csv { source: err }
    }
}

impl From<serde_json::Error> for KitScanError {
    fn from(err: serde_json::Error) -> Self {
        KitScanError::JsonSerialize { source: err }
    }
}

/// Result type alias for kitscan operations
pub type Result<T> = std::result::Result<T, KitScanError>;
