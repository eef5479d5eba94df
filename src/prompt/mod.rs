//! Prompt operations built on the command builder and the config serializer.
//!
//! Each operation is a fixed recipe: build `{binary} {subcommand}`, attach
//! flattened flags, attach positional text or piped candidates, run, decode.
//!
//! # Example
//!
//! ```no_run
//! use gum::prompt::{ConfirmOptions, Gum};
//!
//! let gum = Gum::new();
//! if gum.confirm("Deploy now?", &ConfirmOptions::default()).unwrap() {
//!     let env = gum.choose(&["staging", "production"], None).unwrap();
//!     println!("deploying to {} (#{})", env.selection, env.index);
//! }
//! ```

pub mod selection;

use std::fmt::Display;
use std::time::Duration;

use tracing::{debug, warn};

use crate::command::{CommandResult, CommandRunner, InputSource, ShellCommand, SystemRunner};
use crate::error::{GumError, GumResult};
use crate::schema::{ChooseConfig, Flatten, SpinConfig, StyleConfig};

pub use self::selection::{normalize_choice, Selection};

/// Binary looked up on `PATH` when nothing else is configured.
pub const DEFAULT_BINARY: &str = "gum";

/// Default configurations used when an operation is called without one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Theme {
    /// Used by choose, choose_multiple and their `_by` variants.
    pub choose: ChooseConfig,
    /// Used by spin.
    pub spin: SpinConfig,
    /// Used by style.
    pub style: StyleConfig,
}

/// Options for [`Gum::confirm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    /// Answer automatically with the default after this long.
    pub timeout: Option<Duration>,
    /// Pre-selected answer.
    pub default: Option<bool>,
    /// Treat "no" (a non-zero exit) as an error instead of `false`.
    pub strict: bool,
}

/// Handle on a `gum` binary.
#[derive(Debug, Clone)]
pub struct Gum<R = SystemRunner> {
    binary: String,
    runner: R,
    theme: Theme,
}

impl Gum<SystemRunner> {
    /// Use `gum` from `PATH` with real child processes.
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_BINARY, SystemRunner)
    }
}

impl Default for Gum<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Gum<R> {
    /// Use `binary`, executing through `runner`.
    pub fn with_runner(binary: impl Into<String>, runner: R) -> Self {
        Self {
            binary: binary.into(),
            runner,
            theme: Theme::default(),
        }
    }

    /// Replace the default configurations.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Program name or path of the binary.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Default configurations.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Runner executing the invocations.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Base invocation for `subcommand`.
    pub fn command(&self, subcommand: &str) -> ShellCommand {
        ShellCommand::new([self.binary.as_str(), subcommand])
    }

    /// Ask a yes/no question. The answer is the exit status.
    pub fn confirm(&self, message: &str, options: &ConfirmOptions) -> GumResult<bool> {
        let mut command = self.command("confirm");
        command.capture_stderr(false);

        if !message.is_empty() {
            command.add_positional_args([message]);
        }
        if let Some(timeout) = options.timeout.filter(|t| !t.is_zero()) {
            command.add_key_value_arg("--timeout", format_duration(timeout));
        }
        if let Some(default) = options.default {
            command.add_key_value_arg("--default", default.to_string());
        }

        let result = command.run_with(&self.runner, options.strict)?;
        Ok(result.passed)
    }

    /// Pick exactly one candidate, displayed with its trimmed `Display` text.
    pub fn choose<T>(&self, choices: &[T], config: Option<&ChooseConfig>) -> GumResult<Selection<T>>
    where
        T: Clone + Display,
    {
        self.choose_by(choices, normalize_choice::<T>, config)
    }

    /// Pick exactly one candidate, displayed through `display`.
    ///
    /// Any `limit`/`no_limit` in `config` is overridden.
    pub fn choose_by<T, F>(
        &self,
        choices: &[T],
        display: F,
        config: Option<&ChooseConfig>,
    ) -> GumResult<Selection<T>>
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        let mut config = config.cloned().unwrap_or_else(|| self.theme.choose.clone());
        config.limit = Some(1);
        config.no_limit = false;

        let display = selection::display_strings(choices, display);
        self.run_choose(choices, &display, &config)?
            .into_iter()
            .next()
            .ok_or(GumError::NoSelection)
    }

    /// Pick any number of candidates, displayed with their trimmed `Display` text.
    pub fn choose_multiple<T>(
        &self,
        choices: &[T],
        config: Option<&ChooseConfig>,
    ) -> GumResult<Vec<Selection<T>>>
    where
        T: Clone + Display,
    {
        self.choose_multiple_by(choices, normalize_choice::<T>, config)
    }

    /// Pick candidates displayed through `display`.
    ///
    /// An absent or zero `limit` means unlimited. Selections come back in
    /// the order `gum` printed them.
    pub fn choose_multiple_by<T, F>(
        &self,
        choices: &[T],
        display: F,
        config: Option<&ChooseConfig>,
    ) -> GumResult<Vec<Selection<T>>>
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        let mut config = config.cloned().unwrap_or_else(|| self.theme.choose.clone());
        if config.limit.unwrap_or(0) == 0 {
            config.limit = None;
            config.no_limit = true;
        }

        let display = selection::display_strings(choices, display);
        self.run_choose(choices, &display, &config)
    }

    fn run_choose<T: Clone>(
        &self,
        choices: &[T],
        display: &[String],
        config: &ChooseConfig,
    ) -> GumResult<Vec<Selection<T>>> {
        if choices.is_empty() {
            debug!("choose called without candidates");
            return Ok(Vec::new());
        }

        let mut command = self.command("choose");
        command
            .add_flag_set(config.flatten())
            .add_positional_args(display.iter().cloned())
            .capture_stderr(false);

        let result = command.run_with(&self.runner, true)?;
        result
            .output_lines()
            .into_iter()
            .map(|line| selection::resolve(choices, display, line))
            .collect()
    }

    /// Read a line of text, falling back to `default` when nothing was typed.
    pub fn input(&self, message: &str, default: &str) -> GumResult<String> {
        let mut command = self.command("input");
        command.capture_stderr(false);

        if !message.is_empty() {
            command.add_key_value_arg("--prompt", format!("{}: ", message));
        }
        if !default.is_empty() {
            command.add_key_value_arg("--placeholder", default);
        }

        let result = command.run_with(&self.runner, true)?;
        let text = result.text();
        if text.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(text.to_string())
        }
    }

    /// Fuzzy-filter candidates and pick one, displayed with their trimmed `Display` text.
    pub fn filter<T>(&self, choices: &[T], placeholder: &str) -> GumResult<Selection<T>>
    where
        T: Clone + Display,
    {
        self.filter_by(choices, placeholder, normalize_choice::<T>)
    }

    /// Fuzzy-filter candidates displayed through `display` and pick one.
    ///
    /// Candidates are piped to `gum filter` one per line.
    pub fn filter_by<T, F>(&self, choices: &[T], placeholder: &str, display: F) -> GumResult<Selection<T>>
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        let display = selection::display_strings(choices, display);

        let mut command = self.command("filter");
        command.add_key_value_arg("--limit", "1");
        if !placeholder.is_empty() {
            command.add_key_value_arg("--placeholder", placeholder);
        }

        let mut candidates = display.join("\n");
        candidates.push('\n');
        command
            .set_input(InputSource::Text(candidates))
            .capture_stderr(false);

        let result = command.run_with(&self.runner, true)?;
        match result.output_lines().first() {
            Some(line) if !line.trim().is_empty() => selection::resolve(choices, &display, line),
            _ => Err(GumError::NoSelection),
        }
    }

    /// Render `text` with `config` (or the theme's style).
    ///
    /// Styling is best effort: when `gum` is missing or fails, the plain
    /// text comes back.
    pub fn style(&self, text: &str, config: Option<&StyleConfig>) -> GumResult<String> {
        let config = config.unwrap_or(&self.theme.style);

        let mut command = self.command("style");
        command
            .add_flag_set(config.flatten())
            .add_positional_args([text]);

        let result = match command.run_with(&self.runner, false) {
            Ok(result) => result,
            Err(GumError::Spawn { program, source }) => {
                warn!(%program, error = %source, "styling unavailable, returning plain text");
                return Ok(text.to_string());
            }
            Err(e) => return Err(e),
        };

        if !result.passed && result.stdout.trim().is_empty() {
            debug!(exit_code = result.exit_code, "gum style failed, returning plain text");
            return Ok(text.to_string());
        }
        Ok(result.stdout.trim_end_matches('\n').to_string())
    }

    /// Run `wrapped` behind a spinner and return the spin invocation's result.
    ///
    /// Only the wrapped command's tokens are forwarded; its input source is not.
    pub fn spin(&self, wrapped: &ShellCommand, config: Option<&SpinConfig>) -> GumResult<CommandResult> {
        let config = config.unwrap_or(&self.theme.spin);

        let mut command = self.command("spin");
        command
            .add_flag_set(config.flatten())
            .add_positional_args(["--"])
            .add_positional_args(wrapped.to_args())
            .capture_stderr(false);

        command.run_with(&self.runner, true)
    }
}

/// Go-style duration token: whole seconds as `Ns`, anything finer as `Nms`.
fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}
