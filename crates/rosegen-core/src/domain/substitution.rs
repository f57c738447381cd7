//! Placeholder substitution for template texts.
//!
//! Templates may contain `{{NAME}}` placeholders. A [`SubstitutionMap`] maps
//! placeholder names to replacement strings and renders a template in one
//! linear scan. The bundled boilerplate templates carry no placeholders at
//! all, so the common case is the empty map, which must reproduce the input
//! byte for byte.

use std::collections::HashMap;

/// Mapping from placeholder name to replacement string.
///
/// Using `HashMap` (not `BTreeMap`) because:
/// - Order doesn't matter; placeholders are looked up by name during the scan
/// - O(1) lookup for placeholder resolution
/// - No need for sorted iteration
///
/// # Edge Cases
///
/// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
/// - `{{NAME}}{{NAME}}` → both replaced correctly
/// - Nested braces `{{{NAME}}}` → outer braces preserved, inner replaced
/// - Unterminated `{{` → passed through untouched
/// - Replacement values are emitted verbatim and never rescanned, so a value
///   containing `{{OTHER}}` cannot trigger a second expansion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: HashMap<String, String>,
}

impl SubstitutionMap {
    /// Create an empty map. Rendering with it is the identity function.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution, consuming self and returning a new map.
    ///
    /// Enables fluent construction:
    /// ```rust
    /// use rosegen_core::domain::SubstitutionMap;
    ///
    /// let subs = SubstitutionMap::new()
    ///     .with("NAMESPACE", "MyGame.Server")
    ///     .with("AUTHOR", "someone");
    /// assert_eq!(subs.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a substitution in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get a replacement value if it exists.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a template by replacing every `{{NAME}}` whose name is in the
    /// map. Names missing from the map stay verbatim in the output.
    ///
    /// # Algorithm
    ///
    /// Single linear scan. On each `{{`, the text up to the next `}}` is
    /// looked up as a placeholder name; on a miss, one `{` is emitted and the
    /// scan resumes one byte later (this is what keeps `{{{NAME}}}` working).
    /// Substituted values go straight to the output, so expansion never
    /// recurses. Adequate for the file sizes involved (< 10KB typical); a
    /// real template engine would replace this wholesale, not incrementally.
    pub fn render(&self, template: &str) -> String {
        if self.entries.is_empty() {
            return template.to_owned();
        }

        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];

            let replacement = placeholder_at(tail)
                .and_then(|(name, len)| self.entries.get(name).map(|v| (v.as_str(), len)));

            match replacement {
                Some((value, len)) => {
                    out.push_str(value);
                    rest = &tail[len..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a `{{NAME}}` placeholder at the start of `s`, returning the name and
/// the placeholder's total byte length.
fn placeholder_at(s: &str) -> Option<(&str, usize)> {
    let body = s.strip_prefix("{{")?;
    let close = body.find("}}")?;
    Some((&body[..close], close + 4))
}
