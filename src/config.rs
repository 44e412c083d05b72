use crate::cli::Cli;
use crate::constants::{DEFAULT_OUTPUT_PATH, FAVICON_BASE64};
use anyhow::Result;
use clap::Parser;
use std::borrow::Cow;
use std::path::PathBuf;

/// Application configuration, fixed once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base64 text to decode.
    pub payload: Cow<'static, str>,
    /// Destination file, relative paths resolve against the working directory.
    pub output: PathBuf,
}

impl Config {
    pub fn new(
        payload: impl Into<Cow<'static, str>>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Config {
            payload: payload.into(),
            output: output.into(),
        }
    }

    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        let _cli = Cli::parse();
        Ok(Config::default())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(FAVICON_BASE64, DEFAULT_OUTPUT_PATH)
    }
}
