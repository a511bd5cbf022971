//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::run_common::GenerationOptions;

/// Flags accepted by every command.
pub struct GenerationParams {
    pub config: Option<PathBuf>,
    pub banner: Option<String>,
    pub source_prefix: Option<String>,
    pub verbose: u8,
}

impl GenerationParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            banner: m.get_one::<String>("banner").cloned(),
            source_prefix: m.get_one::<String>("source_prefix").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerationParams> for GenerationOptions {
    fn from(p: GenerationParams) -> Self {
        Self {
            config: p.config,
            banner: p.banner,
            source_prefix: p.source_prefix,
        }
    }
}

pub struct GenerateParams {
    pub package: PathBuf,
    pub output: Option<PathBuf>,
    pub options: GenerationParams,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            package: required_path(m, "package"),
            output: m.get_one::<PathBuf>("output").cloned(),
            options: GenerationParams::from_matches(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            package: p.package,
            output: p.output,
            options: p.options.into(),
        }
    }
}

pub struct CheckParams {
    pub package: PathBuf,
    pub target: PathBuf,
    pub options: GenerationParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            package: required_path(m, "package"),
            target: required_path(m, "target"),
            options: GenerationParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            package: p.package,
            target: p.target,
            options: p.options.into(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap should have caught missing {id}"))
}
