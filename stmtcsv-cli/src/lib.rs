//! stmtcsv-cli: directory handling, configuration and the conversion run behind the `stmtcsv` binary.

pub mod config;
pub mod dirs;
pub mod run;

pub use config::{Config, FileConfig, Overrides, load_file_config};
pub use run::{RunSummary, run, run_with};
