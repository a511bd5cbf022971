//! Document assembly.

use std::fmt;

use indexmap::IndexMap;

/// Rendered blocks of one package, keyed by declaration name.
///
/// Buckets are kept apart until [`TypeScriptTypes::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeScriptTypes {
    pub banner: String,
    /// Interfaces plus map and sequence aliases.
    pub records: IndexMap<String, String>,
    pub enums: IndexMap<String, String>,
    /// Constraint unions.
    pub generics: IndexMap<String, String>,
}

impl TypeScriptTypes {
    /// Banner, then records, enums and generics, each sorted by name.
    ///
    /// Output depends only on the bucket contents, never on insertion order.
    pub fn render(&self) -> String {
        let mut output = String::new();
        if !self.banner.is_empty() {
            output.push_str(&self.banner);
            output.push_str("\n\n");
        }

        for bucket in [&self.records, &self.enums, &self.generics] {
            let mut names: Vec<&String> = bucket.keys().collect();
            names.sort();
            for name in names {
                output.push_str(&bucket[name]);
                output.push('\n');
            }
        }

        output.truncate(output.trim_end().len());
        output
    }

    /// Whether any bucket holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
            || self.enums.contains_key(name)
            || self.generics.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len() + self.enums.len() + self.generics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for TypeScriptTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
