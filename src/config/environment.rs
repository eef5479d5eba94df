//! Environment variable loading and management.

use std::env;
use std::path::{Path, PathBuf};

/// Variable naming the `gum` binary to run.
pub const GUM_BINARY_VAR: &str = "GUM_BINARY";

/// Variable naming the settings file to load.
pub const GUM_SETTINGS_VAR: &str = "GUM_SETTINGS";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to a .env file. Nothing is loaded when None, so an
    ///   unrelated .env in the working directory is never picked up.
    pub fn new(env_file: Option<&Path>) -> Self {
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load .env file");
                }
            }
        }

        Self {
            env_file: env_file.map(Path::to_path_buf),
        }
    }

    /// The .env file this loader was created with.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Binary override from `GUM_BINARY`, ignoring empty values.
    pub fn gum_binary(&self) -> Option<String> {
        non_empty_var(GUM_BINARY_VAR)
    }

    /// Settings file from `GUM_SETTINGS`, ignoring empty values.
    pub fn settings_path(&self) -> Option<PathBuf> {
        non_empty_var(GUM_SETTINGS_VAR).map(PathBuf::from)
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gum_binary_selection() {
        env::remove_var(GUM_BINARY_VAR);
        let env_loader = EnvironmentLoader::default();
        assert_eq!(env_loader.gum_binary(), None);

        env::set_var(GUM_BINARY_VAR, "/usr/local/bin/gum");
        let env_loader = EnvironmentLoader::default();
        assert_eq!(env_loader.gum_binary(), Some("/usr/local/bin/gum".to_string()));

        env::set_var(GUM_BINARY_VAR, "  ");
        assert_eq!(env_loader.gum_binary(), None);

        env::remove_var(GUM_BINARY_VAR);
    }

    #[test]
    fn test_env_file_loading() {
        let env_loader = EnvironmentLoader::new(None);
        assert!(env_loader.env_file().is_none());
    }

    #[test]
    fn test_env_file_sets_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "GUM_KIT_TEST_ONLY_VAR=from-dotenv\n").unwrap();

        let env_loader = EnvironmentLoader::new(Some(&path));
        assert_eq!(env_loader.env_file(), Some(path.as_path()));
        assert_eq!(env::var("GUM_KIT_TEST_ONLY_VAR").unwrap(), "from-dotenv");
    }
}
