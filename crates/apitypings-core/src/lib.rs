#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for apitypings: the type-checked package model.
//!
//! Two layers:
//! - **Dump layer**: the JSON document written by the package loader
//!   (`{ "packages": [...] }`)
//! - **Model layer**: [`Package`], [`Object`] and the [`Type`] descriptor sum type
//!
//! The loader itself (parsing and type-checking source) lives outside this
//! workspace; everything here is plain data.

pub mod package;
pub mod types;
pub mod utils;


pub use package::{ConstValue, Object, ObjectKind, Package, Position};
pub use types::{BasicKind, Field, Interface, NamedType, Term, Type, TypeParam};

// ============================================================================
// Dump Layer
// ============================================================================

/// Raw loader output. Holds every package the loader matched.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PackageDump {
    pub packages: Vec<Package>,
}

/// Errors raised before generation starts.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("decode package dump: {0}")]
    Json(#[from] serde_json::Error),

    /// Only one package per run is supported.
    #[error("expected 1 package, found {0}")]
    PackageCount(usize),
}

/// Parse a package dump and return its single package.
pub fn load_package(json: &str) -> Result<Package, LoadError> {
    let dump: PackageDump = serde_json::from_str(json)?;
    let count = dump.packages.len();
    let mut packages = dump.packages.into_iter();
    match (packages.next(), packages.next()) {
        (Some(package), None) => Ok(package),
        _ => Err(LoadError::PackageCount(count)),
    }
}
