//! Directory-backed template source.
//!
//! Resolves keys against loose `<Key>.cs.txt` files under one directory, the
//! same naming the bundled assets use. Lets a team override the shipped
//! boilerplates without rebuilding the tool; point `--templates-dir`, the
//! `templates.dir` config key, or `ROSEGEN_TEMPLATES_DIR` at the directory.
//!
//! Files are read on every resolve. The sets are tiny and each run resolves
//! each key once, so there is nothing worth caching.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use rosegen_core::{
    application::ports::TemplateSource,
    domain::TemplateKey,
    error::{ScaffoldError, ScaffoldResult},
};

/// File extension of template files inside a templates directory.
const TEMPLATE_EXTENSION: &str = "cs.txt";

/// Template source reading `<dir>/<Key>.cs.txt` files.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn template_path(&self, key: TemplateKey) -> PathBuf {
        self.dir.join(format!("{}.{}", key, TEMPLATE_EXTENSION))
    }
}

impl TemplateSource for DirectoryTemplates {
    fn resolve(&self, key: TemplateKey) -> ScaffoldResult<String> {
        let path = self.template_path(key);
        debug!(key = %key, path = %path.display(), "Resolving directory template");

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ScaffoldError::TemplateNotFound {
                    key,
                    origin: self.origin(),
                })
            }
            Err(e) => Err(ScaffoldError::TemplateUnreadable {
                path,
                reason: e.to_string(),
            }),
        }
    }

    fn origin(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}
