//! Typed bindings for the `gum` terminal prompt tool.
//!
//! The crate builds `gum` invocations, runs them as child processes and
//! decodes their output into Rust values:
//!
//! - **`command`** - Invocation builder, piping and execution
//! - **`schema`** - Configuration objects and their flattening into flags
//! - **`prompt`** - confirm, choose, filter, input, style and spin
//! - **`config`** - Settings file and environment loading (feature-gated)
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! gum-kit = { version = "0.1", features = ["config"] }
//! # Or enable everything:
//! gum-kit = { version = "0.1", features = ["all"] }
//! ```
//!
//! # Example: Prompting
//!
//! ```no_run
//! use gum::prelude::*;
//!
//! let gum = Gum::new();
//! let name = gum.input("Name", "anonymous").unwrap();
//!
//! let mut config = ChooseConfig::default();
//! config.cursor_style.foreground = Some(Color::Ansi(212));
//! let fruit = gum.choose(&["apple", "banana"], Some(&config)).unwrap();
//!
//! println!("{} picked {} (#{})", name, fruit.selection, fruit.index);
//! ```
//!
//! # Example: Spinning around a command
//!
//! ```no_run
//! use gum::prelude::*;
//!
//! let mut build = ShellCommand::new(["cargo", "build"]);
//! build.add_flag("--release");
//!
//! let spin = SpinConfig {
//!     spinner: Some(Spinner::Dot),
//!     title: Some("Building".to_string()),
//!     ..SpinConfig::default()
//! };
//! let result = Gum::new().spin(&build, Some(&spin)).unwrap();
//! assert!(result.passed);
//! ```

#![warn(missing_docs)]

/// Error types shared across the crate
pub mod error;

/// Invocation builder and process execution
pub mod command;

/// Configuration objects and flag flattening
pub mod schema;

/// Prompt operations
pub mod prompt;

/// Settings management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{GumError, GumResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::command::{CommandResult, CommandRunner, InputSource, ShellCommand, SystemRunner};
    pub use crate::error::{GumError, GumResult};
    pub use crate::prompt::{ConfirmOptions, Gum, Selection, Theme};
    pub use crate::schema::{
        Align, Border, ChooseConfig, Color, FlagSet, Flatten, SpinConfig, Spinner, StyleConfig,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{EnvironmentLoader, Settings, SettingsLoader};
}
