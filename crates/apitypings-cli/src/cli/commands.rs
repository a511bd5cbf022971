//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Generation options shared by every command.
fn with_generation_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(banner_arg())
        .arg(source_prefix_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("apitypings")
        .about("Generate TypeScript declarations from a Go API package")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Generate the declaration file.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate TypeScript declarations")
        .override_usage(
            "\
  apitypings generate <PACKAGE> [-o <FILE>]
  apitypings generate - < package.json",
        )
        .after_help(
            r#"EXAMPLES:
  apitypings generate codersdk.json                      # print to stdout
  apitypings generate codersdk.json -o typesGenerated.ts # write to file
  apitypings generate codersdk.json --config apitypings.toml
  apitypings generate codersdk.json --source-prefix codersdk -v"#,
        )
        .arg(package_arg())
        .arg(output_file_arg());

    with_generation_args(cmd)
}

/// Verify a generated file is current.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that a generated file is up to date")
        .override_usage("  apitypings check <PACKAGE> <FILE>")
        .after_help(
            r#"EXAMPLES:
  apitypings check codersdk.json site/src/api/typesGenerated.ts
  apitypings check - typesGenerated.ts < codersdk.json"#,
        )
        .arg(package_arg())
        .arg(target_arg());

    with_generation_args(cmd)
}
