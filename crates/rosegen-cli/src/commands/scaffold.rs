//! The scaffold commands (`single-account`, `multi-account`).
//!
//! Responsibility: translate CLI arguments into a service call and display
//! results.  No scaffolding logic lives here.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use rosegen_adapters::{DirectoryTemplates, EmbeddedTemplates, LocalFilesystem};
use rosegen_core::{
    application::{GenerateOptions, ScaffoldService, TemplateSource},
    domain::{BoilerplateKind, SubstitutionMap},
};

use crate::{
    cli::{GlobalArgs, ScaffoldArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a scaffold command for the given kind.
///
/// Dispatch sequence:
/// 1. Parse the `--set` substitution pairs
/// 2. Resolve the project root (argument, then config, then `.`)
/// 3. Pick the template source (`--templates-dir`, config, built-in)
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Confirm with the user unless skipped
/// 6. Generate and print the written paths
#[instrument(skip_all, fields(kind = %kind))]
pub fn execute(
    kind: BoilerplateKind,
    args: ScaffoldArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let substitutions = parse_substitutions(&args.set)?;
    let root = resolve_root(args.path.clone(), &config);

    let source =
        template_source(args.templates_dir.clone().or_else(|| config.templates.dir.clone()));
    let origin = source.origin();
    let service = ScaffoldService::new(source, Box::new(LocalFilesystem::new()));

    debug!(
        root = %root.display(),
        templates = %origin,
        substitutions = substitutions.len(),
        force = args.force,
        "Run resolved"
    );

    // Dry run: resolve and render, write nothing.
    if args.dry_run {
        let plan = service.plan(kind, &substitutions)?;
        output.info(&format!(
            "Dry run: would write {} files under {}",
            plan.file_count(),
            root.display()
        ))?;
        for relative in plan.relative_paths() {
            output.print(&format!("  {}", root.join(relative).display()))?;
        }
        return Ok(());
    }

    // The prompt is skipped when the user pre-answered (--yes), asked for
    // silence (--quiet), or there is no terminal to ask on.
    let skip_prompt = args.yes || global.quiet || !io::stdin().is_terminal();
    if !skip_prompt {
        show_run(kind, &root, &origin, &output)?;
        if !confirm("Generate these files?", &output)? {
            output.error("Cancelled. No files were written.")?;
            return Err(CliError::Cancelled);
        }
    }

    let options = GenerateOptions {
        overwrite: args.force || config.defaults.overwrite,
        substitutions,
    };

    output.header(&format!("Scaffolding {}...", kind.description()))?;
    info!(root = %root.display(), "Scaffold started");

    let written = service.generate(kind, &root, &options)?;

    info!(files = written.len(), "Scaffold finished");

    for path in &written {
        output.print(&format!("  {}", path.display()))?;
    }
    output.success(&format!(
        "{} ready ({} files)",
        kind.description(),
        written.len()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  Fill in the endpoint and API key on the client behaviour")?;
        output.print("  Adjust the generated models to your game's data")?;
    }

    Ok(())
}

// ── Argument resolution ───────────────────────────────────────────────────────

/// Turn the repeatable `--set KEY=VALUE` pairs into a substitution map.
///
/// Later pairs win over earlier ones for the same key.
fn parse_substitutions(pairs: &[String]) -> CliResult<SubstitutionMap> {
    let mut map = SubstitutionMap::new();

    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::InvalidSubstitution {
                pair: pair.clone(),
                reason: "expected KEY=VALUE".into(),
            })?;
        if key.is_empty() {
            return Err(CliError::InvalidSubstitution {
                pair: pair.clone(),
                reason: "key must not be empty".into(),
            });
        }
        map.set(key, value);
    }

    Ok(map)
}

/// Project root: explicit argument, then configured default, then `.`.
fn resolve_root(arg: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    arg.or_else(|| config.defaults.project_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Template source: a directory when one was named, the built-in set
/// otherwise.
fn template_source(dir: Option<PathBuf>) -> Box<dyn TemplateSource> {
    match dir {
        Some(dir) => Box::new(DirectoryTemplates::new(dir)),
        None => Box::new(EmbeddedTemplates::new()),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_run(
    kind: BoilerplateKind,
    root: &Path,
    origin: &str,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Boilerplate:  {}", kind.description()))?;
    out.print(&format!("  Project root: {}", root.display()))?;
    out.print(&format!("  Templates:    {origin}"))?;
    out.print(&format!("  Files:        {}", kind.specs().len()))?;
    out.print("")?;
    Ok(())
}

fn confirm(prompt: &str, out: &OutputManager) -> CliResult<bool> {
    use owo_colors::OwoColorize;
    use std::io::Write;

    if out.supports_color() {
        print!("{} [Y/n] ", prompt.bold());
    } else {
        print!("{prompt} [Y/n] ");
    }
    io::stdout().flush().map_err(|e| CliError::Io {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(|e| CliError::Io {
        message: "failed to read confirmation input".into(),
        source: e,
    })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
