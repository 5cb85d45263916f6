//! Project configuration read from `.tasklane/config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_DIR: &str = ".tasklane";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Configuration loaded from `.tasklane/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    store_path: PathBuf,
    default_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: Path::new(CONFIG_DIR).join(DEFAULT_STORE_FILE),
            default_route: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `workdir`, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read, parsed or validated.
    pub fn load(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error when the text is not valid TOML or fails validation.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.default_route.is_empty() && !self.default_route.starts_with('#') {
            bail!(
                "default_route '{}' must be empty or start with '#'",
                self.default_route
            );
        }
        if self.store_path.as_os_str().is_empty() {
            bail!("store_path must not be empty");
        }
        Ok(())
    }

    /// Task file location, resolved against `workdir` when relative.
    #[must_use]
    pub fn store_path(&self, workdir: impl AsRef<Path>) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            workdir.as_ref().join(&self.store_path)
        }
    }

    /// Route used when the caller does not name one.
    #[must_use]
    pub fn default_route(&self) -> &str {
        &self.default_route
    }
}
