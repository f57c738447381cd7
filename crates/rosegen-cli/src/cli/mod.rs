//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No scaffolding logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use rosegen_core::domain::BoilerplateKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rosegen",
    bin_name = "rosegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} NetRose storage API client boilerplates",
    long_about = "Rosegen drops ready-to-edit storage API client code (data \
                  models plus an HTTP client behaviour) into a NetRose game \
                  project.",
    after_help = "EXAMPLES:\n\
        \x20 rosegen single-account\n\
        \x20 rosegen multi-account ./MyGame --set NAMESPACE=MyGame.Server\n\
        \x20 rosegen list --format json\n\
        \x20 rosegen completions bash > /usr/share/bash-completion/completions/rosegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the single-account storage API client.
    #[command(
        visible_alias = "single",
        about = "Scaffold the single-account storage API client",
        after_help = "EXAMPLES:\n\
            \x20 rosegen single-account\n\
            \x20 rosegen single-account ./MyGame --dry-run\n\
            \x20 rosegen single-account --force --yes"
    )]
    SingleAccount(ScaffoldArgs),

    /// Scaffold the multi-account storage API client.
    #[command(
        visible_alias = "multi",
        about = "Scaffold the multi-account storage API client",
        after_help = "EXAMPLES:\n\
            \x20 rosegen multi-account\n\
            \x20 rosegen multi-account ./MyGame --set TEAM=WorldServer\n\
            \x20 rosegen multi-account --templates-dir ./my-templates"
    )]
    MultiAccount(ScaffoldArgs),

    /// List the files each boilerplate kind generates.
    #[command(
        visible_alias = "ls",
        about = "List generated files per boilerplate kind",
        after_help = "EXAMPLES:\n\
            \x20 rosegen list\n\
            \x20 rosegen list --kind multi-account\n\
            \x20 rosegen list --format json"
    )]
    List(ListArgs),

    /// Initialise a rosegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 rosegen init\n\
            \x20 rosegen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rosegen completions bash > ~/.local/share/bash-completion/completions/rosegen\n\
            \x20 rosegen completions zsh  > ~/.zfunc/_rosegen\n\
            \x20 rosegen completions fish > ~/.config/fish/completions/rosegen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── scaffold (single-account / multi-account) ─────────────────────────────────

/// Arguments shared by the two scaffold commands.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Project root to generate into.  Defaults to the configured root, or
    /// the current directory.
    #[arg(value_name = "PATH", help = "Project root (default: current directory)")]
    pub path: Option<PathBuf>,

    /// Overwrite pre-existing output files.
    #[arg(
        short = 'f',
        long = "force",
        help = "Overwrite existing output files"
    )]
    pub force: bool,

    /// Print the plan without writing any files.
    #[arg(
        short = 'n',
        long = "dry-run",
        help = "Show what would be written without writing"
    )]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Template substitution, as `KEY=VALUE`.  `{{KEY}}` in a template body
    /// becomes `VALUE` in the generated file.  Repeatable.
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        help = "Add a template substitution (repeatable)"
    )]
    pub set: Vec<String>,

    /// Resolve templates from a directory of `<Key>.cs.txt` files instead of
    /// the built-in set.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Load templates from a directory instead of the built-in set"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `rosegen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict the listing to one boilerplate kind.
    #[arg(short = 'k', long = "kind", value_enum, help = "Filter by kind")]
    pub kind: Option<KindArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable, grouped per kind.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rosegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rosegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Boilerplate kinds as they appear on the command line.
///
/// Mirrors [`BoilerplateKind`]; kept separate so the core crate never
/// depends on clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum KindArg {
    /// Also accepted as `single`.
    #[value(alias = "single")]
    SingleAccount,
    /// Also accepted as `multi`.
    #[value(alias = "multi")]
    MultiAccount,
}

impl From<KindArg> for BoilerplateKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::SingleAccount => BoilerplateKind::SingleAccount,
            KindArg::MultiAccount => BoilerplateKind::MultiAccount,
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleAccount => write!(f, "single-account"),
            Self::MultiAccount => write!(f, "multi-account"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
