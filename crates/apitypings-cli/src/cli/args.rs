//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Package dump produced by the loader (positional).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .value_name("PACKAGE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Package dump (JSON) to generate from, or \"-\" for stdin")
}

/// Previously generated file to compare against (positional).
pub fn target_arg() -> Arg {
    Arg::new("target")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Generated TypeScript file to check")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration file")
}

/// Banner line (--banner).
pub fn banner_arg() -> Arg {
    Arg::new("banner")
        .long("banner")
        .value_name("TEXT")
        .help("First line of the generated file")
}

/// Directory shown in `// From` lines (--source-prefix).
pub fn source_prefix_arg() -> Arg {
    Arg::new("source_prefix")
        .long("source-prefix")
        .value_name("DIR")
        .help("Directory shown in source comments (default: package name)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace)")
}
