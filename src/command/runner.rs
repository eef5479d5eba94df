//! Process execution behind a small trait so prompts can run against a fake.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use super::{CommandResult, InputSource, ShellCommand};
use crate::error::{GumError, GumResult};

/// Executes a [`ShellCommand`] and captures its output.
///
/// Implementations report the raw outcome; exit-status checking is done by
/// [`ShellCommand::run_with`].
pub trait CommandRunner {
    /// Execute `command`, resolving its input source first.
    fn execute(&self, command: &ShellCommand) -> GumResult<CommandResult>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn execute(&self, command: &ShellCommand) -> GumResult<CommandResult> {
        (**self).execute(command)
    }
}

/// Runs commands as real child processes, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn resolve_input(&self, command: &ShellCommand) -> GumResult<Option<String>> {
        match command.input() {
            None => Ok(None),
            Some(InputSource::Text(text)) => Ok(Some(text.clone())),
            Some(InputSource::Command(upstream)) => {
                let result = upstream.run_with(self, true)?;
                Ok(Some(result.stdout))
            }
        }
    }
}

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &ShellCommand) -> GumResult<CommandResult> {
        let stdin_data = self.resolve_input(command)?;

        let args = command.to_args();
        let (program, rest) = args.split_first().ok_or_else(|| {
            GumError::spawn("", io::Error::new(io::ErrorKind::InvalidInput, "empty command"))
        })?;

        debug!(command = %command, piped = stdin_data.is_some(), "spawning command");

        let mut cmd = Command::new(program);
        cmd.args(rest).stdout(Stdio::piped());
        cmd.stdin(if stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        cmd.stderr(if command.captures_stderr() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

        let mut child = cmd.spawn().map_err(|e| GumError::spawn(program.as_str(), e))?;

        // Feed stdin from a separate thread so a child that writes a lot
        // before reading can not block on a full stdout pipe.
        let writer = match (stdin_data, child.stdin.take()) {
            (Some(data), Some(mut stdin)) => {
                Some(thread::spawn(move || stdin.write_all(data.as_bytes())))
            }
            _ => None,
        };

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Ok(())) => {}
                // The child may exit without draining its input.
                Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => return Err(io::Error::other("stdin writer thread panicked").into()),
            }
        }

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command = %command, exit_code, "command finished");

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code,
            passed: output.status.success(),
        })
    }
}
