//! Domain value objects: PathPrefix, ResolvedPath.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Resolution is textual: nothing here touches a filesystem, collapses `..`
//! segments, or rejects absolute names. Backends own any security boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator inserted between a non-empty prefix and a template name.
pub const SEPARATOR: char = '/';

// ── PathPrefix ───────────────────────────────────────────────────────────────

/// A normalised storage prefix prepended to every template name.
///
/// Invariant: either empty, or ends with exactly one [`SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Normalise a raw prefix. Trailing separators collapse to one.
    ///
    /// A prefix made only of separators keeps a single one, so `"/"`
    /// resolves `a.twig` to `/a.twig`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Self::default();
        }
        let mut normalised = raw.trim_end_matches(SEPARATOR).to_owned();
        normalised.push(SEPARATOR);
        Self(normalised)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compose the storage path for `name`.
    pub fn resolve(&self, name: &str) -> ResolvedPath {
        let mut path = String::with_capacity(self.0.len() + name.len());
        path.push_str(&self.0);
        path.push_str(name);
        ResolvedPath(path)
    }

    /// Inverse of [`Self::resolve`] for listings: the template name stored at
    /// `path`, or `None` if `path` lies outside the prefix.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.0.as_str())
    }
}

impl From<String> for PathPrefix {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PathPrefix {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PathPrefix> for String {
    fn from(prefix: PathPrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── ResolvedPath ─────────────────────────────────────────────────────────────

/// Storage-layer path for one lookup. Computed per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_resolves_to_name() {
        let prefix = PathPrefix::default();
        assert!(prefix.is_empty());
        assert_eq!(prefix.resolve("test/Object.twig").as_str(), "test/Object.twig");
    }

    #[test]
    fn prefix_gets_exactly_one_separator() {
        for raw in ["templates", "templates/", "templates///"] {
            let prefix = PathPrefix::new(raw);
            assert_eq!(
                prefix.resolve("test/Object.twig").as_str(),
                "templates/test/Object.twig",
                "raw prefix {raw:?}"
            );
        }
    }

    #[test]
    fn separator_only_prefix_keeps_root() {
        assert_eq!(PathPrefix::new("/").resolve("a.twig").as_str(), "/a.twig");
    }

    #[test]
    fn resolution_is_textual() {
        let prefix = PathPrefix::new("templates");
        assert_eq!(
            prefix.resolve("../secret").as_str(),
            "templates/../secret"
        );
        assert_eq!(prefix.resolve("/abs").as_str(), "templates//abs");
    }

    #[test]
    fn strip_inverts_resolve() {
        let prefix = PathPrefix::new("templates");
        let path = prefix.resolve("mail/body.twig");
        assert_eq!(prefix.strip(path.as_str()), Some("mail/body.twig"));
        assert_eq!(prefix.strip("other/body.twig"), None);
    }

    #[test]
    fn deserialises_through_normalisation() {
        let prefix: PathPrefix = String::from("views//").into();
        assert_eq!(prefix.as_str(), "views/");
    }
}
