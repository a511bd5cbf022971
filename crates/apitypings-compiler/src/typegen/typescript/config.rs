//! Configuration types for TypeScript generation.

use indexmap::IndexMap;
use serde::Deserialize;

/// Banner placed at the top of every generated document.
pub const DEFAULT_BANNER: &str = "// Code generated by apitypings. DO NOT EDIT.";

/// Fixed rendering for an external named type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KnownType {
    /// TypeScript expression used in place of the type.
    pub expr: String,
    /// Nullable types render their fields optional.
    #[serde(default)]
    pub optional: bool,
}

impl KnownType {
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            optional: false,
        }
    }

    pub fn nullable(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            optional: true,
        }
    }
}

/// Configuration for TypeScript generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// First line of the document
    pub(crate) banner: String,
    /// Directory shown in `// From` lines; the package name when unset
    pub(crate) source_prefix: Option<String>,
    /// Qualified name (`time.Time`) -> fixed rendering
    pub(crate) known_types: IndexMap<String, KnownType>,
}

impl Default for Config {
    fn default() -> Self {
        let known_types = [
            ("net/url.URL", KnownType::new("string")),
            ("time.Time", KnownType::new("string")),
            ("github.com/google/uuid.UUID", KnownType::new("string")),
            ("database/sql.NullTime", KnownType::nullable("string")),
            ("github.com/google/uuid.NullUUID", KnownType::nullable("string")),
        ]
        .into_iter()
        .map(|(name, known)| (name.to_string(), known))
        .collect();

        Self {
            banner: DEFAULT_BANNER.to_string(),
            source_prefix: None,
            known_types,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the banner line.
    pub fn banner(mut self, value: impl Into<String>) -> Self {
        self.banner = value.into();
        self
    }

    /// Set the directory shown in `// From` lines.
    pub fn source_prefix(mut self, value: impl Into<String>) -> Self {
        self.source_prefix = Some(value.into());
        self
    }

    /// Add or replace a known external type.
    pub fn known_type(mut self, qualified_name: impl Into<String>, known: KnownType) -> Self {
        self.known_types.insert(qualified_name.into(), known);
        self
    }
}
