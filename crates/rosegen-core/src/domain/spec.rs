//! Boilerplate kind tables.
//!
//! All knowledge about what each boilerplate produces lives in plain `const`
//! tables: each [`BoilerplateKind`] maps to a fixed, ordered list of
//! [`TemplateSpec`] entries, and one generic service routine interprets them.
//! What to generate is data; how to invoke it is someone else's problem.
//!
//! ## Design Notes
//!
//! - Tables are `const` and immutable. Nothing here outlives an invocation;
//!   every run recomputes its plan from these tables.
//! - Declaration order is the write order (client file first, then models).
//! - `Scope`, `Map` and `Position` are shared between both kinds.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Root directory chain shared by every generated file, relative to the
/// project root.
pub const SCAFFOLD_ROOT: [&str; 5] = ["Scripts", "Server", "Authoring", "Behaviours", "External"];

/// Extension of every generated file. The templates are C# script sources.
pub const OUTPUT_EXTENSION: &str = "cs";

// ============================================================================
// Template Identity
// ============================================================================

/// Identifier of a template text, equal to the bundled asset's base name
/// (`SingleCharAccount` for `SingleCharAccount.cs.txt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateKey(&'static str);

impl TemplateKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// Output Placement
// ============================================================================

/// Final path segment under [`SCAFFOLD_ROOT`] a file lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputBranch {
    /// The API client behaviour.
    Client,
    /// The model behaviours backing it.
    Models,
}

impl OutputBranch {
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Models => "Models",
        }
    }
}

impl fmt::Display for OutputBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// One template-to-output mapping: which template text to instantiate, what
/// to call the resulting file, and which branch it belongs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateSpec {
    /// Template to resolve through the [`TemplateSource`] port.
    ///
    /// [`TemplateSource`]: crate::application::ports::TemplateSource
    pub key: TemplateKey,
    /// Base name of the generated file (no extension).
    pub output_base: &'static str,
    /// Placement under the shared root.
    pub branch: OutputBranch,
}

impl TemplateSpec {
    pub const fn new(key: &'static str, output_base: &'static str, branch: OutputBranch) -> Self {
        Self {
            key: TemplateKey::new(key),
            output_base,
            branch,
        }
    }

    /// Generated file name, extension included.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.output_base, OUTPUT_EXTENSION)
    }

    /// Destination path relative to the project root:
    /// `Scripts/Server/Authoring/Behaviours/External/<branch>/<base>.cs`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = SCAFFOLD_ROOT.iter().collect();
        path.push(self.branch.segment());
        path.push(self.file_name());
        path
    }
}

impl fmt::Display for TemplateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}/{}", self.key, self.branch, self.file_name())
    }
}

// ============================================================================
// Boilerplate Kinds
// ============================================================================

/// A named preset bundle of template-to-output mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoilerplateKind {
    /// Storage API client for games where an account owns exactly one
    /// playable character.
    SingleAccount,
    /// Storage API client for games where an account owns many characters.
    MultiAccount,
}

const SINGLE_ACCOUNT_SPECS: &[TemplateSpec] = &[
    TemplateSpec::new(
        "SingleCharAccountAPIClient",
        "SingleCharAccountAPIClient",
        OutputBranch::Client,
    ),
    TemplateSpec::new("SingleCharAccount", "SingleCharAccount", OutputBranch::Models),
    TemplateSpec::new("Scope", "Scope", OutputBranch::Models),
    TemplateSpec::new("Map", "Map", OutputBranch::Models),
    TemplateSpec::new("Position", "Position", OutputBranch::Models),
];

const MULTI_ACCOUNT_SPECS: &[TemplateSpec] = &[
    TemplateSpec::new(
        "MultiCharAccountAPIClient",
        "MultiCharAccountAPIClient",
        OutputBranch::Client,
    ),
    TemplateSpec::new("MultiCharAccount", "MultiCharAccount", OutputBranch::Models),
    TemplateSpec::new("Character", "Character", OutputBranch::Models),
    TemplateSpec::new("Scope", "Scope", OutputBranch::Models),
    TemplateSpec::new("Map", "Map", OutputBranch::Models),
    TemplateSpec::new("Position", "Position", OutputBranch::Models),
];

impl BoilerplateKind {
    /// Every supported kind, in presentation order.
    pub const ALL: [Self; 2] = [Self::SingleAccount, Self::MultiAccount];

    /// The kind's spec table. Order is the write order.
    pub fn specs(self) -> &'static [TemplateSpec] {
        match self {
            Self::SingleAccount => SINGLE_ACCOUNT_SPECS,
            Self::MultiAccount => MULTI_ACCOUNT_SPECS,
        }
    }

    /// Stable machine/CLI-facing name.
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleAccount => "single-account",
            Self::MultiAccount => "multi-account",
        }
    }

    /// Human-facing description used in listings and prompts.
    pub fn description(self) -> &'static str {
        match self {
            Self::SingleAccount => "Single-Account storage API client",
            Self::MultiAccount => "Multiple-Account storage API client",
        }
    }
}

impl fmt::Display for BoilerplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
