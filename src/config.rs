//! Host configuration.
//!
//! Built once from CLI flags and the environment (`.env` is loaded by
//! `main` before parsing) and handed to [`crate::run`]. The engine itself
//! never reads it.

use crate::cli::{GlobalOpts, OutputFormat};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub color: bool,
    pub show_siblings: bool,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Terminal,
            color: true,
            show_siblings: true,
            log_config: PathBuf::from("log4rs.yml"),
        }
    }
}

impl From<&GlobalOpts> for Config {
    fn from(opts: &GlobalOpts) -> Self {
        Config {
            output: opts.output,
            color: !opts.no_color,
            show_siblings: !opts.no_siblings,
            log_config: opts.log_config.clone(),
        }
    }
}
