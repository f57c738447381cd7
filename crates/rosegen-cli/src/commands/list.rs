//! Implementation of the `rosegen list` command.
//!
//! Everything printed here comes from the kind tables; no template content
//! is resolved, so listing works even with a broken `--templates-dir`.

use serde::Serialize;

use rosegen_core::domain::BoilerplateKind;

use crate::{
    cli::{KindArg, ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let kinds = selected_kinds(args.kind);

    match args.format {
        ListFormat::Table => {
            for kind in &kinds {
                output.header(&format!("{} ({})", kind.description(), kind.label()))?;
                for spec in kind.specs() {
                    output.print(&format!("  {}", spec.relative_path().display()))?;
                }
                output.print("")?;
            }
        }

        ListFormat::List => {
            for kind in &kinds {
                for spec in kind.specs() {
                    println!("{}", spec.relative_path().display());
                }
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let listing: Vec<KindListing> =
                kinds.into_iter().map(KindListing::from).collect();
            let json =
                serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn selected_kinds(filter: Option<KindArg>) -> Vec<BoilerplateKind> {
    match filter {
        Some(kind) => vec![kind.into()],
        None => BoilerplateKind::ALL.to_vec(),
    }
}

/// One kind's listing in machine-readable form.
#[derive(Debug, Serialize)]
struct KindListing {
    kind: BoilerplateKind,
    description: &'static str,
    files: Vec<String>,
}

impl From<BoilerplateKind> for KindListing {
    fn from(kind: BoilerplateKind) -> Self {
        Self {
            kind,
            description: kind.description(),
            files: kind
                .specs()
                .iter()
                .map(|spec| spec.relative_path().display().to_string())
                .collect(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
