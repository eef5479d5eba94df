//! Mock implementation of the command runner for testing

use crate::command::{CommandResult, CommandRunner, ShellCommand};
use crate::error::GumResult;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock runner that replays scripted results and records every command
#[derive(Clone, Default)]
pub struct MockRunner {
    pub responses: Arc<Mutex<VecDeque<CommandResult>>>,
    pub calls: Arc<Mutex<Vec<ShellCommand>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result with the given stdout and exit code
    pub fn respond(&self, stdout: &str, exit_code: i32) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(CommandResult::new(stdout, "", exit_code));
        self
    }

    /// Queue a failing result that carries stderr
    pub fn respond_error(&self, stderr: &str, exit_code: i32) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(CommandResult::new("", stderr, exit_code));
        self
    }

    pub fn get_calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded command, panicking if there were more or fewer
    pub fn only_call(&self) -> ShellCommand {
        let calls = self.get_calls();
        assert_eq!(calls.len(), 1, "expected exactly one command, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

impl CommandRunner for MockRunner {
    fn execute(&self, command: &ShellCommand) -> GumResult<CommandResult> {
        self.calls.lock().unwrap().push(command.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| CommandResult::new("", "", 0)))
    }
}
