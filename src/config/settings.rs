//! TOML settings parsing and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::environment::EnvironmentLoader;
use crate::command::{CommandRunner, SystemRunner};
use crate::prompt::{Gum, Theme, DEFAULT_BINARY};

/// Settings file searched for when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "gum.toml";

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Program name or path of the `gum` binary.
    pub binary: String,
    /// Default prompt configurations.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            theme: Theme::default(),
        }
    }
}

/// Loads and manages TOML settings.
#[derive(Debug)]
pub struct SettingsLoader {
    /// File the settings were read from (it may not exist).
    pub settings_path: PathBuf,
    /// Loaded settings.
    pub settings: Settings,
}

impl SettingsLoader {
    /// Initialize settings loader.
    ///
    /// # Arguments
    /// * `settings_path` - Path to TOML settings file. If None, uses `gum.toml`
    ///   in the current directory, falling back to defaults when it is absent.
    pub fn new(settings_path: Option<&Path>) -> Result<Self> {
        let settings_path = settings_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

        let settings = if settings_path.exists() {
            Self::load_settings(&settings_path)?
        } else {
            Settings::default()
        };

        Ok(Self {
            settings_path,
            settings,
        })
    }

    /// Initialize from the environment: `GUM_SETTINGS` picks the file and
    /// `GUM_BINARY` overrides the binary it names.
    pub fn from_environment(env: &EnvironmentLoader) -> Result<Self> {
        let settings_path = env.settings_path();
        let mut loader = Self::new(settings_path.as_deref())?;
        loader.apply_environment(env);
        Ok(loader)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Settings> {
        toml::from_str(content).context("Failed to parse TOML settings")
    }

    /// Load settings from TOML file.
    fn load_settings(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML settings: {}", path.display()))
    }

    /// Apply environment overrides on top of the file contents.
    pub fn apply_environment(&mut self, env: &EnvironmentLoader) {
        if let Some(binary) = env.gum_binary() {
            tracing::debug!(%binary, "binary overridden by environment");
            self.settings.binary = binary;
        }
    }

    /// Build a client that runs real processes.
    pub fn build(&self) -> Gum<SystemRunner> {
        self.build_with_runner(SystemRunner)
    }

    /// Build a client that executes through `runner`.
    pub fn build_with_runner<R: CommandRunner>(&self, runner: R) -> Gum<R> {
        Gum::with_runner(self.settings.binary.clone(), runner)
            .with_theme(self.settings.theme.clone())
    }
}
