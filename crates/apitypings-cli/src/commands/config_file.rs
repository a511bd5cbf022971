//! `apitypings.toml` loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use apitypings_compiler::{Config, KnownType};
use serde::Deserialize;

/// On-disk configuration. Every key is optional.
///
/// ```toml
/// banner = "// Code generated by apitypings. DO NOT EDIT."
/// source_prefix = "codersdk"
///
/// [known_types."github.com/coder/coder/codersdk.NullTime"]
/// expr = "string"
/// optional = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub banner: Option<String>,
    pub source_prefix: Option<String>,
    #[serde(default)]
    pub known_types: BTreeMap<String, KnownType>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Layer this file over `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(banner) = self.banner {
            config = config.banner(banner);
        }
        if let Some(prefix) = self.source_prefix {
            config = config.source_prefix(prefix);
        }
        for (name, known) in self.known_types {
            config = config.known_type(name, known);
        }
        config
    }
}
