//! Settings management for the `gum` client.
//!
//! This module loads a TOML settings file (binary + default prompt theme)
//! and applies environment overrides, optionally read from a `.env` file.
//!
//! # Example
//!
//! ```no_run
//! use gum::config::{EnvironmentLoader, SettingsLoader};
//!
//! let env = EnvironmentLoader::new(None);
//! let loader = SettingsLoader::from_environment(&env).unwrap();
//!
//! let gum = loader.build();
//! println!("using {}", gum.binary());
//! ```

pub mod environment;
pub mod settings;

// Re-export main types for convenience
pub use self::environment::{EnvironmentLoader, GUM_BINARY_VAR, GUM_SETTINGS_VAR};
pub use self::settings::{Settings, SettingsLoader, DEFAULT_SETTINGS_FILE};
