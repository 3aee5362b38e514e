//! Shell execution of command chains
//!
//! A shortcut's commands run as one shell invocation joined with `&&`, so a
//! failing command stops the rest. The shell inherits stdin, stdout and
//! stderr from this process.

use std::process::Command;

use thiserror::Error;

use crate::domain::CommandList;

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Failed to start {shell}: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed{}: {line}", exit_suffix(.code))]
    Failed { code: Option<i32>, line: String },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

/// Joins commands into one `&&` chain
///
/// Blank entries are no-ops and are left out of the chain; the others are
/// passed through untouched.
pub fn chain(commands: &CommandList) -> String {
    commands
        .iter()
        .filter(|c| !c.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" && ")
}

/// Runs command chains through a shell
#[derive(Debug, Clone)]
pub struct Executor {
    shell: String,
}

impl Executor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    fn shell_flag(&self) -> &'static str {
        let program = std::path::Path::new(&self.shell)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if program.eq_ignore_ascii_case("cmd") {
            "/C"
        } else {
            "-c"
        }
    }

    /// Runs the commands and waits for the shell to exit
    pub fn execute(&self, commands: &CommandList) -> Result<(), ExecutionError> {
        let line = chain(commands);
        if line.is_empty() {
            return Ok(());
        }

        let status = Command::new(&self.shell)
            .arg(self.shell_flag())
            .arg(&line)
            .status()
            .map_err(|source| ExecutionError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutionError::Failed {
                code: status.code(),
                line,
            })
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(crate::storage::DEFAULT_SHELL)
    }
}
