// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for rosegen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (template loading, file writing) are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable data**: Boilerplate tables are `const`; plans are recomputed
//!   from them on every run and never persisted

// Public API - what the world sees
pub mod plan;
pub mod spec;
pub mod substitution;

// Re-exports for convenience
pub use plan::{PlannedFile, ScaffoldPlan};
pub use spec::{
    BoilerplateKind, OUTPUT_EXTENSION, OutputBranch, SCAFFOLD_ROOT, TemplateKey, TemplateSpec,
};
pub use substitution::SubstitutionMap;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module behavior
    // ========================================================================

    #[test]
    fn rendered_specs_assemble_into_a_valid_plan() {
        let subs = SubstitutionMap::new();
        let files = BoilerplateKind::MultiAccount
            .specs()
            .iter()
            .map(|spec| PlannedFile::new(spec.relative_path(), subs.render("// placeholder\n")))
            .collect();

        let plan = ScaffoldPlan::new(BoilerplateKind::MultiAccount, files);
        assert!(plan.validate().is_ok());
        assert_eq!(plan.file_count(), 6);
    }

    #[test]
    fn plan_paths_preserve_table_order() {
        let files = BoilerplateKind::SingleAccount
            .specs()
            .iter()
            .map(|spec| PlannedFile::new(spec.relative_path(), String::new()))
            .collect();
        let plan = ScaffoldPlan::new(BoilerplateKind::SingleAccount, files);

        let names: Vec<_> = plan
            .files()
            .iter()
            .map(|f| f.relative_path().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "SingleCharAccountAPIClient.cs",
                "SingleCharAccount.cs",
                "Scope.cs",
                "Map.cs",
                "Position.cs"
            ]
        );
    }

    #[test]
    fn substitutions_flow_through_planned_content() {
        let subs = SubstitutionMap::new().with("NAMESPACE", "MyGame.Server");
        let file = PlannedFile::new(
            BoilerplateKind::SingleAccount.specs()[0].relative_path(),
            subs.render("namespace {{NAMESPACE}} {}"),
        );
        assert_eq!(file.content(), "namespace MyGame.Server {}");
    }
}
