//! Filesystem adapters.
//!
//! `LocalFilesystem` is the production implementation; `MemoryFilesystem`
//! backs service-level tests without touching disk.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
