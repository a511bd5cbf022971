pub mod check;
pub mod config_file;
pub mod generate;
pub mod package_loader;
pub mod run_common;
