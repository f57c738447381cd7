//! Compiled-in template assets.
//!
//! The eight boilerplate texts live under `templates/` in this crate and are
//! embedded with `include_str!`, so the release binary is self-contained and
//! needs no companion files on disk.

use tracing::debug;

use rosegen_core::{
    application::ports::TemplateSource,
    domain::TemplateKey,
    error::{ScaffoldError, ScaffoldResult},
};

/// Template source backed by the assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Look up an embedded asset by key.
    fn asset(key: TemplateKey) -> Option<&'static str> {
        let text = match key.as_str() {
            "SingleCharAccount" => include_str!("../../templates/SingleCharAccount.cs.txt"),
            "MultiCharAccount" => include_str!("../../templates/MultiCharAccount.cs.txt"),
            "Character" => include_str!("../../templates/Character.cs.txt"),
            "Scope" => include_str!("../../templates/Scope.cs.txt"),
            "Map" => include_str!("../../templates/Map.cs.txt"),
            "Position" => include_str!("../../templates/Position.cs.txt"),
            "SingleCharAccountAPIClient" => {
                include_str!("../../templates/SingleCharAccountAPIClient.cs.txt")
            }
            "MultiCharAccountAPIClient" => {
                include_str!("../../templates/MultiCharAccountAPIClient.cs.txt")
            }
            _ => return None,
        };
        Some(text)
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn resolve(&self, key: TemplateKey) -> ScaffoldResult<String> {
        debug!(key = %key, "Resolving embedded template");
        Self::asset(key)
            .map(str::to_owned)
            .ok_or_else(|| ScaffoldError::TemplateNotFound {
                key,
                origin: self.origin(),
            })
    }

    fn origin(&self) -> String {
        "built-in templates".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosegen_core::domain::BoilerplateKind;

    #[test]
    fn every_table_key_resolves() {
        let source = EmbeddedTemplates::new();
        for kind in BoilerplateKind::ALL {
            for spec in kind.specs() {
                let text = source.resolve(spec.key).unwrap();
                assert!(!text.is_empty(), "empty asset for {}", spec.key);
            }
        }
    }

    #[test]
    fn assets_contain_no_placeholders() {
        // The bundled boilerplates must pass through rendering unchanged.
        let source = EmbeddedTemplates::new();
        for kind in BoilerplateKind::ALL {
            for spec in kind.specs() {
                let text = source.resolve(spec.key).unwrap();
                assert!(!text.contains("{{"), "placeholder found in {}", spec.key);
            }
        }
    }

    #[test]
    fn assets_declare_the_class_they_scaffold() {
        let source = EmbeddedTemplates::new();
        for kind in BoilerplateKind::ALL {
            for spec in kind.specs() {
                let text = source.resolve(spec.key).unwrap();
                assert!(
                    text.contains(&format!("class {}", spec.output_base)),
                    "{} does not declare class {}",
                    spec.key,
                    spec.output_base
                );
            }
        }
    }

    #[test]
    fn unknown_key_is_not_found() {
        let source = EmbeddedTemplates::new();
        let err = source.resolve(TemplateKey::new("NoSuchTemplate")).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::TemplateNotFound { origin, .. } if origin == "built-in templates"
        ));
    }
}
