//! Infrastructure adapters for rosegen.
//!
//! This crate implements the ports defined in `rosegen_core::application::ports`.
//! It contains all external dependencies and I/O operations: the bundled
//! template assets, directory-backed template resolution, and filesystem
//! access.

pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{DirectoryTemplates, EmbeddedTemplates};
