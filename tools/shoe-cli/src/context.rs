//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use shoe_observability::{LogLevel, RenderId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading an explicit config file or discovering one.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = cwd.join(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Logger for one command run. Verbose output forces debug level.
    pub fn logger(&self, component: &str) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            self.config.logging.level.min(LogLevel::Debug)
        } else {
            self.config.logging.level
        };

        StructuredLogger::new(RenderId::generate())
            .with_component(component)
            .with_min_level(level)
            .with_format(self.config.logging.format)
    }

    /// Default config, quiet output, rooted at `cwd`.
    #[cfg(test)]
    pub fn in_dir(cwd: &Path) -> Self {
        Self {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.cwd.join(path)
    }
}

/// Find a config file in `start` or any of its parents.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
