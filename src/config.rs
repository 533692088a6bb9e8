// src/config.rs

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "/app/data";
pub const DEFAULT_OUTPUT_DIR: &str = "/app/output";

/// Where the input tables live, where the reports go, and how to run them.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Run the two report pipelines on the rayon pool instead of back to back.
    pub parallel: bool,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            parallel: false,
        }
    }

    /// The input location must already exist; the output location is created on demand.
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.exists() {
            bail!(
                "data directory `{}` does not exist",
                self.data_dir.display()
            );
        }
        if !self.data_dir.is_dir() {
            bail!(
                "data directory `{}` is not a directory",
                self.data_dir.display()
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
