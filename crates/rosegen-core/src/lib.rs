//! Rosegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the rosegen
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          rosegen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateSource, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rosegen-adapters (Infrastructure)    │
//! │ (EmbeddedTemplates, LocalFilesystem, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (BoilerplateKind, SubstitutionMap, Plan)│
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rosegen_core::{
//!     application::{GenerateOptions, ScaffoldService},
//!     domain::BoilerplateKind,
//! };
//!
//! // Adapters are injected at the composition root (the CLI).
//! let service = ScaffoldService::new(templates, filesystem);
//! let written = service
//!     .generate(
//!         BoilerplateKind::SingleAccount,
//!         std::path::Path::new("./my-game"),
//!         &GenerateOptions::default(),
//!     )
//!     .unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, ScaffoldService,
        ports::{Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        BoilerplateKind, OutputBranch, PlannedFile, ScaffoldPlan, SubstitutionMap, TemplateKey,
        TemplateSpec,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
