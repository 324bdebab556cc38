//! `Vcs` implementation backed by the system `git` binary.
//!
//! All operations use `std::process::Command` to shell out to `git`, inheriting
//! the user's existing git config, hooks, and signing setup.

use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GitError;

use super::Vcs;

/// Runs git commands in a working copy.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Operate on the repository containing the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operate on the repository at `workdir`.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn output(&self, args: &[&str], operation: &str) -> Result<Output, GitError> {
        debug!("Running git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        cmd.output().map_err(|source| GitError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })
    }

    /// Run a git command and return its stdout, or a descriptive error.
    fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        let output = self.output(args, operation)?;

        if !output.status.success() {
            return Err(command_failed(&output, operation));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn command_failed(output: &Output, operation: &str) -> GitError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let stderr = if stderr.is_empty() {
        format!("exited with code {}", output.status.code().unwrap_or(-1))
    } else {
        stderr
    };
    GitError::CommandFailed {
        operation: operation.to_string(),
        stderr,
    }
}

/// Split `git diff --name-only` output into paths, dropping blank lines.
pub fn parse_name_only(output: &str) -> Vec<String> {
    output
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl Vcs for GitCli {
    fn staged_files(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.run_git(&["diff", "--cached", "--name-only"], "list staged files")?;
        Ok(parse_name_only(&stdout))
    }

    fn staged_diff(&self) -> Result<String, GitError> {
        self.run_git(&["diff", "--cached"], "read staged diff")
    }

    fn core_editor(&self) -> Result<Option<String>, GitError> {
        let operation = "read core.editor";
        let output = self.output(&["config", "--get", "core.editor"], operation)?;

        // Exit code 1 means the key is not set.
        match output.status.code() {
            Some(0) => {
                let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(Some(value).filter(|v| !v.is_empty()))
            }
            Some(1) => Ok(None),
            _ => Err(command_failed(&output, operation)),
        }
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit")?;
        Ok(())
    }
}
