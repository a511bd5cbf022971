//! Shared logic for generate and check commands.

use std::path::{Path, PathBuf};

use apitypings_compiler::{Config, generate_with_config};
use tracing::debug;

use super::config_file::ConfigFile;
use super::package_loader::load_package_dump;

/// Where configuration comes from. Flags override the file.
#[derive(Debug, Default)]
pub struct GenerationOptions {
    pub config: Option<PathBuf>,
    pub banner: Option<String>,
    pub source_prefix: Option<String>,
}

impl GenerationOptions {
    pub fn resolve_config(&self) -> Result<Config, String> {
        let mut config = Config::new();
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "loading config file");
            config = ConfigFile::load(path).map_err(|e| e.to_string())?.apply(config);
        }
        if let Some(banner) = &self.banner {
            config = config.banner(banner.clone());
        }
        if let Some(prefix) = &self.source_prefix {
            config = config.source_prefix(prefix.clone());
        }
        Ok(config)
    }
}

/// Load, generate and render the document, with its trailing newline.
pub fn render_document(package_path: &Path, options: &GenerationOptions) -> Result<String, String> {
    let config = options.resolve_config()?;
    let package = load_package_dump(package_path)?;
    let types = generate_with_config(&package, &config).map_err(|e| e.to_string())?;

    let mut document = types.render();
    document.push('\n');
    Ok(document)
}
