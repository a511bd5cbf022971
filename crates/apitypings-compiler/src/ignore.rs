//! `@typescript-ignore` directive scanning.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static IGNORE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@typescript-ignore:?(?P<ignored>.*)").expect("ignore directive regex is valid")
});

/// Identifiers excluded from generation. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Collect every identifier listed by a directive in any comment line.
    pub fn scan<S: AsRef<str>>(comments: &[S]) -> Self {
        let mut names = HashSet::new();

        for line in comments.iter().flat_map(|c| c.as_ref().lines()) {
            let Some(caps) = IGNORE_DIRECTIVE.captures(line) else {
                continue;
            };
            let list = caps["ignored"].trim_end();
            let list = list.strip_suffix("*/").unwrap_or(list);
            for name in list.split(',') {
                let name = name.trim();
                if !name.is_empty() {
                    tracing::debug!(name, "ignoring declaration");
                    names.insert(name.to_string());
                }
            }
        }

        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
