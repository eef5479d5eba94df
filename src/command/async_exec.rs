//! Awaitable execution on the tokio runtime, with an optional timeout.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::debug;

use super::{CommandResult, InputSource, ShellCommand};
use crate::error::{GumError, GumResult};

impl ShellCommand {
    /// Execute on tokio's process API.
    ///
    /// Resumes only once the whole chain (upstream input included) has
    /// exited. When `timeout_after` elapses the child is killed and
    /// [`GumError::TimedOut`] is returned.
    ///
    /// # Arguments
    /// * `check` - Turn a non-zero exit into [`GumError::CommandFailed`].
    /// * `timeout_after` - Optional deadline for the whole chain.
    pub async fn run_async(
        &self,
        check: bool,
        timeout_after: Option<Duration>,
    ) -> GumResult<CommandResult> {
        let result = match timeout_after {
            Some(limit) => match timeout(limit, self.execute_async()).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(GumError::TimedOut {
                        command: self.to_string(),
                        elapsed: limit,
                    })
                }
            },
            None => self.execute_async().await?,
        };

        self.check_result(result, check)
    }

    async fn execute_async(&self) -> GumResult<CommandResult> {
        let stdin_data = match self.input() {
            None => None,
            Some(InputSource::Text(text)) => Some(text.clone()),
            Some(InputSource::Command(upstream)) => {
                Some(Box::pin(upstream.run_async(true, None)).await?.stdout)
            }
        };

        let args = self.to_args();
        let (program, rest) = args.split_first().ok_or_else(|| {
            GumError::spawn(
                "",
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            )
        })?;

        debug!(command = %self, piped = stdin_data.is_some(), "spawning command (async)");

        let mut cmd = TokioCommand::new(program);
        cmd.args(rest)
            .stdout(Stdio::piped())
            .stdin(if stdin_data.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .stderr(if self.captures_stderr() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| GumError::spawn(program.as_str(), e))?;

        let output = match (stdin_data, child.stdin.take()) {
            (Some(data), Some(mut stdin)) => {
                let feed = async move {
                    let written = stdin.write_all(data.as_bytes()).await;
                    drop(stdin);
                    written
                };
                let (written, output) = tokio::join!(feed, child.wait_with_output());
                match written {
                    Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                    _ => output?,
                }
            }
            _ => child.wait_with_output().await?,
        };

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command = %self, exit_code, "command finished (async)");

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code,
            passed: output.status.success(),
        })
    }
}
