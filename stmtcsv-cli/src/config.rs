use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use stmtcsv_ingest::StatementFormat;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Move processed PDFs here once every CSV has been written.
    pub archive: Option<PathBuf>,
    pub header: bool,
    pub format: StatementFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            archive: None,
            header: true,
            format: StatementFormat::default(),
        }
    }
}

/// Optional TOML config file. Every key may be omitted.
///
/// ```toml
/// input = "statements"
/// output = "csv"
/// archive = "done"
/// header = false
/// format = "chase-uk"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub archive: Option<PathBuf>,
    pub header: Option<bool>,
    pub format: Option<StatementFormat>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub archive: Option<PathBuf>,
    pub no_header: bool,
    pub format: Option<StatementFormat>,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

impl Config {
    /// Command line beats config file, config file beats built-in defaults.
    pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Config::default();

        Self {
            input: overrides.input.or(file.input).unwrap_or(defaults.input),
            output: overrides.output.or(file.output).unwrap_or(defaults.output),
            archive: overrides.archive.or(file.archive),
            header: if overrides.no_header {
                false
            } else {
                file.header.unwrap_or(defaults.header)
            },
            format: overrides.format.or(file.format).unwrap_or(defaults.format),
        }
    }
}
