//! Command building and execution.
//!
//! A [`ShellCommand`] is assembled incrementally (base tokens, key/value
//! flags, boolean flags, positional arguments, optional piped input) and then
//! executed through a [`CommandRunner`]. Execution never mutates the command,
//! so the same value can be run again or wrapped by another command.
//!
//! # Example
//!
//! ```no_run
//! use gum::command::{InputSource, ShellCommand};
//!
//! let mut filter = ShellCommand::new(["gum", "filter"]);
//! filter
//!     .add_key_value_arg("--limit", "1")
//!     .set_input(InputSource::Text("apple\nbanana\n".to_string()));
//!
//! let result = filter.run(true).unwrap();
//! println!("picked {}", result.text());
//! ```

pub mod runner;

#[cfg(feature = "async")]
pub mod async_exec;

use std::fmt;

use crate::error::{GumError, GumResult};
use crate::schema::FlagSet;

pub use self::runner::{CommandRunner, SystemRunner};

/// Where a command's standard input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal text written to stdin.
    Text(String),
    /// The captured stdout of an upstream command, run first.
    Command(Box<ShellCommand>),
}

/// Output of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Raw standard output.
    pub stdout: String,
    /// Captured standard error (empty when stderr was not captured).
    pub stderr: String,
    /// Exit code, or -1 when the process was terminated by a signal.
    pub exit_code: i32,
    /// Whether the process exited successfully.
    pub passed: bool,
}

impl CommandResult {
    /// Build a result from captured streams and an exit code.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
            passed: exit_code == 0,
        }
    }

    /// Standard output with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.stdout.trim()
    }

    /// Lines of [`text`](Self::text); empty output has no lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text().lines().collect()
    }

    /// Lines of stdout with only the trailing line terminators removed.
    ///
    /// Leading and trailing spaces of each line are kept, so lines can be
    /// compared with the exact strings that were handed to the process.
    pub fn output_lines(&self) -> Vec<&str> {
        self.stdout.trim_end_matches(['\n', '\r']).lines().collect()
    }
}

/// An external process invocation under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    command: Vec<String>,
    flag_set: FlagSet,
    positional: Vec<String>,
    input: Option<InputSource>,
    capture_stderr: bool,
}

impl ShellCommand {
    /// Start a command from its program name and fixed subcommand tokens.
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            flag_set: FlagSet::new(),
            positional: Vec::new(),
            input: None,
            capture_stderr: true,
        }
    }

    /// Program name (first base token).
    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    /// Base tokens: program plus fixed subcommand.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Append literal tokens after all flags.
    pub fn add_positional_args<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positional.extend(values.into_iter().map(Into::into));
        self
    }

    /// Register a boolean switch.
    pub fn add_flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.flag_set.push_flag(name);
        self
    }

    /// Register several boolean switches.
    pub fn add_flags<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.flag_set.push_flag(name);
        }
        self
    }

    /// Register a flag with a value. A later value for the same key wins.
    ///
    /// The pair is rendered by [`to_args`](Self::to_args) as a single
    /// `--key=value` token rather than two tokens, so values starting with
    /// `-` reach the program intact.
    pub fn add_key_value_arg(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.flag_set.insert(key, value);
        self
    }

    /// Register several flags with values.
    pub fn add_key_value_args<I, K, V>(&mut self, kv_args: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in kv_args {
            self.flag_set.insert(key, value);
        }
        self
    }

    /// Merge a flattened configuration into this command.
    pub fn add_flag_set(&mut self, flag_set: FlagSet) -> &mut Self {
        self.flag_set.merge(flag_set);
        self
    }

    /// Replace the caller's stdin with `source`.
    pub fn set_input(&mut self, source: InputSource) -> &mut Self {
        self.input = Some(source);
        self
    }

    /// Choose whether stderr is captured or left attached to the terminal.
    pub fn capture_stderr(&mut self, capture: bool) -> &mut Self {
        self.capture_stderr = capture;
        self
    }

    /// Whether stderr is captured.
    pub fn captures_stderr(&self) -> bool {
        self.capture_stderr
    }

    /// Configured input source, if any.
    pub fn input(&self) -> Option<&InputSource> {
        self.input.as_ref()
    }

    /// Flags registered so far.
    pub fn flag_set(&self) -> &FlagSet {
        &self.flag_set
    }

    /// Positional arguments registered so far.
    pub fn positional_args(&self) -> &[String] {
        &self.positional
    }

    /// Full token sequence: base tokens, `--key=value` pairs, boolean flags,
    /// then positional arguments.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.command.clone();
        args.extend(self.flag_set.to_args());
        args.extend(self.positional.iter().cloned());
        args
    }

    /// Run through the system runner.
    ///
    /// With `check` set, a non-zero exit becomes [`GumError::CommandFailed`];
    /// otherwise it is reported through [`CommandResult::passed`].
    pub fn run(&self, check: bool) -> GumResult<CommandResult> {
        self.run_with(&SystemRunner, check)
    }

    /// Run through `runner`, with the same `check` semantics as [`run`](Self::run).
    pub fn run_with<R>(&self, runner: &R, check: bool) -> GumResult<CommandResult>
    where
        R: CommandRunner + ?Sized,
    {
        let result = runner.execute(self)?;
        self.check_result(result, check)
    }

    pub(crate) fn check_result(&self, result: CommandResult, check: bool) -> GumResult<CommandResult> {
        if check && !result.passed {
            return Err(GumError::command_failed(
                self.to_string(),
                result.exit_code,
                result.stderr.trim(),
            ));
        }
        Ok(result)
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .to_args()
            .into_iter()
            .map(|token| {
                if token.is_empty() || token.contains(char::is_whitespace) {
                    format!("{:?}", token)
                } else {
                    token
                }
            })
            .collect();
        f.write_str(&rendered.join(" "))
    }
}
