//! Unified error handling for rosegen-core.
//!
//! One taxonomy covers the whole scaffolding workflow. I/O causes are carried
//! as stringified reasons so the type stays `Clone` and `PartialEq` (the
//! paths matter far more than the `io::Error` machinery here). Every variant
//! knows its category and its user-actionable suggestions; the CLI layer
//! turns those into colored output and exit codes.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKey;

/// Root error type for scaffolding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// A required template identifier could not be resolved.
    ///
    /// Fatal, raised during planning, so nothing has been written yet.
    #[error("template '{key}' not found in {origin}")]
    TemplateNotFound { key: TemplateKey, origin: String },

    /// A template file exists but could not be read.
    ///
    /// Only directory-backed sources raise this; embedded templates are
    /// compiled in and always readable.
    #[error("template at {path} could not be read: {reason}")]
    TemplateUnreadable { path: PathBuf, reason: String },

    /// Destination file already present and overwrite not requested.
    ///
    /// Fatal for that file; files written earlier in the same run stay on
    /// disk. The run is safe to repeat after the conflict is resolved.
    #[error("output file already exists: {path}")]
    OutputAlreadyExists { path: PathBuf },

    /// Creating part of the destination directory chain failed.
    #[error("failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// Writing a rendered file failed (permissions, disk full).
    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { key, origin } => vec![
                format!("No template named '{}' in {}", key, origin),
                "Run: rosegen list to see what each kind generates".into(),
                format!(
                    "If you passed --templates-dir, make sure it contains '{}.cs.txt'",
                    key
                ),
            ],
            Self::TemplateUnreadable { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check read permissions on the templates directory".into(),
            ],
            Self::OutputAlreadyExists { path } => vec![
                format!("A file is already present at: {}", path.display()),
                "Re-run with --force to overwrite it".into(),
                "Or move the existing file out of the way first".into(),
                "Files written before this one are still in place".into(),
            ],
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check write permissions under the project root".into(),
                "A regular file may exist where a directory is needed".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check write permissions and available disk space".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in rosegen".into(),
                "Please report this issue at: https://github.com/cosecruz/rosegen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateUnreadable { .. } => ErrorCategory::Configuration,
            Self::OutputAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::DirectoryCreationFailed { .. } | Self::WriteFailed { .. } => {
                ErrorCategory::Filesystem
            }
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Something the user asked for does not exist.
    NotFound,
    /// The destination disagrees with what the run wants to write.
    Conflict,
    /// The underlying filesystem refused an operation.
    Filesystem,
    /// The tool's own setup (templates directory, config file) is off.
    Configuration,
    /// Bugs.
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
