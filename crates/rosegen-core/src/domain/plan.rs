//! The rendered-but-unwritten form of a scaffold.
//!
//! A [`ScaffoldPlan`] is what the service computes before touching the
//! filesystem: every template resolved and rendered, every destination path
//! fixed, in write order. Dry runs print it; real runs write it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::BoilerplateKind;
use crate::error::{ScaffoldError, ScaffoldResult};

/// One file the plan will produce: destination relative to the project root,
/// plus the fully rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    relative_path: PathBuf,
    content: String,
}

impl PlannedFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered set of files one invocation will write.
///
/// Recomputed from the kind tables on every run; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    kind: BoilerplateKind,
    files: Vec<PlannedFile>,
}

impl ScaffoldPlan {
    pub fn new(kind: BoilerplateKind, files: Vec<PlannedFile>) -> Self {
        Self { kind, files }
    }

    pub fn kind(&self) -> BoilerplateKind {
        self.kind
    }

    /// Files in write order (client file first, then models).
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Destination paths in write order.
    pub fn relative_paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.relative_path())
    }

    /// Check structural invariants: a plan is non-empty, all destinations are
    /// relative, and no destination appears twice.
    ///
    /// The kind tables guarantee all three, so a violation here is a bug in
    /// the tables, not a user condition.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.files.is_empty() {
            return Err(ScaffoldError::Internal {
                message: format!("plan for '{}' contains no files", self.kind),
            });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.relative_path.is_absolute() {
                return Err(ScaffoldError::Internal {
                    message: format!(
                        "plan contains absolute path: {}",
                        file.relative_path.display()
                    ),
                });
            }
            if !seen.insert(&file.relative_path) {
                return Err(ScaffoldError::Internal {
                    message: format!(
                        "plan contains duplicate path: {}",
                        file.relative_path.display()
                    ),
                });
            }
        }

        Ok(())
    }
}
