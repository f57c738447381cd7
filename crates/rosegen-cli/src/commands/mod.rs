//! Command handlers, one module per subcommand.
//!
//! The two scaffold subcommands (`single-account`, `multi-account`) share
//! one handler parameterised by kind.

pub mod completions;
pub mod init;
pub mod list;
pub mod scaffold;
