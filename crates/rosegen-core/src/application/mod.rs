//! Application layer - orchestration over the domain.
//!
//! Contains the scaffold use case and the driven ports it needs. No
//! implementations live here; `rosegen-adapters` provides those and the CLI
//! injects them at the composition root.

pub mod ports;
pub mod service;

pub use ports::{Filesystem, TemplateSource};
pub use service::{GenerateOptions, ScaffoldService};
