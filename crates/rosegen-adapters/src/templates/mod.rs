//! Template source adapters.
//!
//! Two implementations of the `TemplateSource` port ship with the tool:
//!
//! - [`EmbeddedTemplates`]: the boilerplate texts compiled into the binary.
//!   This is the default.
//! - [`DirectoryTemplates`]: loose `<Key>.cs.txt` files under a directory,
//!   for teams that maintain their own variants. Selected via
//!   `--templates-dir`, the `templates.dir` config key, or
//!   `ROSEGEN_TEMPLATES_DIR`.
//!
//! Both resolve the same keys; the service never knows which one it holds.

pub mod directory;
pub mod embedded;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
