//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rosegen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateKey;
use crate::error::ScaffoldResult;

/// Port for resolving template texts by key.
///
/// Implemented by:
/// - `rosegen_adapters::templates::EmbeddedTemplates` (compiled-in assets)
/// - `rosegen_adapters::templates::DirectoryTemplates` (loose files on disk)
///
/// A network-backed source would slot in behind the same trait; the service
/// never learns where template text comes from.
pub trait TemplateSource: Send + Sync {
    /// Resolve the template text for a key.
    ///
    /// Fails with `TemplateNotFound` when the key has no text in this source.
    fn resolve(&self, key: TemplateKey) -> ScaffoldResult<String>;

    /// Human-readable origin, used in logs and error messages
    /// ("built-in templates", "directory /path/to/templates").
    fn origin(&self) -> String;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rosegen_adapters::filesystem::LocalFilesystem` (production)
/// - `rosegen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent; directories left behind by earlier runs
///   are never an error
/// - There is deliberately no `remove_*` operation: the scaffold workflow
///   never rolls back, it fails fast and leaves earlier files in place
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
