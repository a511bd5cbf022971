//! TypeScript declaration generation.
//!
//! One pass over the package scope feeds three buckets (records, enums,
//! generic unions); [`TypeScriptTypes::render`] sorts and joins them.
//!
//! - `generator` - the classifier pass and shared state
//! - `convert` - source type to TypeScript expression mapping
//! - `render` - interface, enum and alias blocks
//! - `output` - document assembly

mod config;
mod convert;
mod generator;
mod output;
mod render;

#[cfg(test)]
mod render_tests;

use apitypings_core::Package;

pub use config::{Config, DEFAULT_BANNER, KnownType};
pub use convert::{GenericBinding, MapError, TsType};
pub use generator::Generator;
pub use output::TypeScriptTypes;

use crate::Result;

/// Generate declarations for `package` with the default configuration.
pub fn generate(package: &Package) -> Result<TypeScriptTypes> {
    generate_with_config(package, &Config::default())
}

/// Generate declarations for `package`.
pub fn generate_with_config(package: &Package, config: &Config) -> Result<TypeScriptTypes> {
    Generator::new(package, config.clone()).generate()
}
