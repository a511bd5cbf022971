//! apitypings compiler: turns a loaded package into TypeScript declarations.
//!
//! This crate provides the generation pipeline:
//! - `tags` - struct tag parsing and field directives
//! - `ignore` - `@typescript-ignore` directive scanning
//! - `typegen` - declaration classification, type mapping and output assembly

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ignore;
pub mod tags;
pub mod typegen;

#[cfg(test)]
mod ignore_tests;
#[cfg(test)]
pub mod test_utils;

pub use ignore::IgnoreSet;
pub use tags::{FieldDirective, StructTag, TagError};
pub use typegen::typescript::{
    Config, KnownType, MapError, TsType, TypeScriptTypes, generate, generate_with_config,
};

/// Errors that abort a generation run. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A named type whose underlying shape has no TypeScript rendering.
    #[error("unsupported named type {name:?} ({file}): {shape} `{ty}`")]
    UnsupportedDeclaration {
        name: String,
        file: String,
        shape: &'static str,
        ty: String,
    },

    #[error("generate {decl:?} ({file}): field {field:?}: {source}")]
    Field {
        decl: String,
        file: String,
        field: String,
        source: MapError,
    },

    #[error("generate {decl:?} ({file}): {source}")]
    Declaration {
        decl: String,
        file: String,
        source: MapError,
    },

    #[error("invalid struct tag on {decl}.{field} ({file}): {source}")]
    Tag {
        decl: String,
        file: String,
        field: String,
        source: TagError,
    },

    /// One generic symbol bound to two different constraints within a block.
    #[error(
        "generic parameter {symbol} of {decl:?} ({file}) is bound to both `{first}` and `{second}`"
    )]
    ConflictingGeneric {
        decl: String,
        file: String,
        symbol: String,
        first: String,
        second: String,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
