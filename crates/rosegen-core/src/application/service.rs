//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve every template in the kind's table
//! 2. Render each with the substitution map
//! 3. Write the plan to the filesystem
//!
//! Steps 1-2 are the planning pass and touch nothing on disk; a missing
//! template therefore aborts with zero files written. Step 3 fails fast on
//! the first conflict or I/O error and leaves already-written files in
//! place. There is no rollback: each run is cheap to repeat once the user
//! resolves the reported condition.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateSource},
    domain::{BoilerplateKind, PlannedFile, ScaffoldPlan, SubstitutionMap},
    error::{ScaffoldError, ScaffoldResult},
};

/// Options for a single generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Replace pre-existing output files instead of failing on them.
    pub overwrite: bool,
    /// Placeholder substitutions applied to every template. Empty for the
    /// bundled boilerplates.
    pub substitutions: SubstitutionMap,
}

/// Main scaffolding service.
///
/// Interprets the kind tables against the injected template source and
/// filesystem. One instance handles any number of runs.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(templates: Box<dyn TemplateSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Resolve and render a kind's table without writing anything.
    ///
    /// This is the dry-run half of [`generate`](Self::generate); the CLI also
    /// uses it to preview and list output sets.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn plan(
        &self,
        kind: BoilerplateKind,
        substitutions: &SubstitutionMap,
    ) -> ScaffoldResult<ScaffoldPlan> {
        let specs = kind.specs();
        let mut files = Vec::with_capacity(specs.len());

        for spec in specs {
            let raw = self.templates.resolve(spec.key)?;
            let content = substitutions.render(&raw);
            debug!(key = %spec.key, path = %spec.relative_path().display(), "Planned file");
            files.push(PlannedFile::new(spec.relative_path(), content));
        }

        let plan = ScaffoldPlan::new(kind, files);
        plan.validate()?;
        Ok(plan)
    }

    /// Scaffold a boilerplate kind under `project_root`.
    ///
    /// This is the main use case. Returns the written paths in write order
    /// (the client file first, then the model files).
    #[instrument(
        skip_all,
        fields(kind = %kind, project_root = %project_root.display())
    )]
    pub fn generate(
        &self,
        kind: BoilerplateKind,
        project_root: &Path,
        options: &GenerateOptions,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        info!(
            templates = %self.templates.origin(),
            "Scaffolding {} boilerplate",
            kind.description()
        );

        let plan = self.plan(kind, &options.substitutions)?;
        let written = self.write_plan(&plan, project_root, options.overwrite)?;

        info!(files = written.len(), "Scaffold completed successfully");
        Ok(written)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every planned file under `root`, in plan order.
    ///
    /// Pre-existing destination files fail the run with `OutputAlreadyExists`
    /// unless `overwrite` is set; the conflicting file is left untouched
    /// either way until the write itself happens.
    fn write_plan(
        &self,
        plan: &ScaffoldPlan,
        root: &Path,
        overwrite: bool,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(plan.file_count());

        for file in plan.files() {
            let destination = root.join(file.relative_path());

            if let Some(parent) = destination.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            if !overwrite && self.filesystem.exists(&destination) {
                return Err(ScaffoldError::OutputAlreadyExists { path: destination });
            }

            self.filesystem.write_file(&destination, file.content())?;
            info!(path = %destination.display(), "Wrote file");
            written.push(destination);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    // ─── helpers ────────────────────────────────────────────────────────────

    /// Fixed-map template source for planning tests. The write path is
    /// exercised against the real adapters in `rosegen-adapters`.
    struct MapSource {
        entries: HashMap<&'static str, &'static str>,
    }

    impl MapSource {
        fn with_all_templates(content: &'static str) -> Self {
            let mut entries = HashMap::new();
            for kind in BoilerplateKind::ALL {
                for spec in kind.specs() {
                    entries.insert(spec.key.as_str(), content);
                }
            }
            Self { entries }
        }
    }

    impl TemplateSource for MapSource {
        fn resolve(&self, key: crate::domain::TemplateKey) -> ScaffoldResult<String> {
            self.entries
                .get(key.as_str())
                .map(|s| (*s).to_owned())
                .ok_or_else(|| ScaffoldError::TemplateNotFound {
                    key,
                    origin: self.origin(),
                })
        }

        fn origin(&self) -> String {
            "test fixture".into()
        }
    }

    /// Filesystem stub that panics on use; plan() must never touch it.
    struct UntouchableFilesystem;

    impl Filesystem for UntouchableFilesystem {
        fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
            panic!("planning touched the filesystem: {}", path.display());
        }

        fn write_file(&self, path: &Path, _content: &str) -> ScaffoldResult<()> {
            panic!("planning touched the filesystem: {}", path.display());
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    fn service(source: MapSource) -> ScaffoldService {
        ScaffoldService::new(Box::new(source), Box::new(UntouchableFilesystem))
    }

    // ─── planning ───────────────────────────────────────────────────────────

    #[test]
    fn plan_preserves_table_order_and_paths() {
        let svc = service(MapSource::with_all_templates("// body\n"));
        let plan = svc
            .plan(BoilerplateKind::SingleAccount, &SubstitutionMap::new())
            .unwrap();

        let paths: Vec<_> = plan.relative_paths().collect();
        assert_eq!(paths.len(), 5);
        assert_eq!(
            paths[0],
            Path::new("Scripts/Server/Authoring/Behaviours/External/Client")
                .join("SingleCharAccountAPIClient.cs")
        );
        assert!(paths[1..].iter().all(|p| {
            p.parent().unwrap().file_name().unwrap() == "Models"
        }));
    }

    #[test]
    fn plan_renders_substitutions() {
        let svc = service(MapSource::with_all_templates("class {{NAME}} {}"));
        let subs = SubstitutionMap::new().with("NAME", "Anything");
        let plan = svc.plan(BoilerplateKind::MultiAccount, &subs).unwrap();

        for file in plan.files() {
            assert_eq!(file.content(), "class Anything {}");
        }
    }

    #[test]
    fn plan_with_empty_map_passes_templates_through() {
        let svc = service(MapSource::with_all_templates("verbatim {{UNTOUCHED}}\n"));
        let plan = svc
            .plan(BoilerplateKind::SingleAccount, &SubstitutionMap::new())
            .unwrap();
        assert_eq!(plan.files()[0].content(), "verbatim {{UNTOUCHED}}\n");
    }

    #[test]
    fn missing_template_fails_planning_with_key_and_origin() {
        let mut source = MapSource::with_all_templates("x");
        source.entries.remove("Map");
        let svc = service(source);

        let err = svc
            .plan(BoilerplateKind::SingleAccount, &SubstitutionMap::new())
            .unwrap_err();
        match err {
            ScaffoldError::TemplateNotFound { key, origin } => {
                assert_eq!(key.as_str(), "Map");
                assert_eq!(origin, "test fixture");
            }
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn generate_aborts_before_any_write_when_a_template_is_missing() {
        let mut source = MapSource::with_all_templates("x");
        source.entries.remove("Character");
        // UntouchableFilesystem panics on any write attempt, so reaching the
        // error proves nothing was written.
        let svc = service(source);

        let err = svc
            .generate(
                BoilerplateKind::MultiAccount,
                Path::new("/proj"),
                &GenerateOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound { .. }));
    }
}
