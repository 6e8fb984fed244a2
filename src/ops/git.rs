#![allow(async_fn_in_trait)]

use std::time::Duration;

use anyhow::Context;
use anyhow::Result;
#[cfg(test)]
use mockall::automock;
use tokio::process::Command;

// -----------------------------------------------------------------------------
// GitCli trait

/// Low-level execution of git subprocesses.
#[cfg_attr(test, automock)]
pub trait GitCli {
    /// Run git with the given arguments and wait for it to exit.
    async fn run(&self, args: &[String]) -> Result<ExecOutput>;

    /// Run git with the given arguments, giving up after `timeout`.
    /// A child that does not finish in time is killed and reported as
    /// [`Exec::TimedOut`], not as an error.
    async fn run_bounded(&self, args: &[String], timeout: Duration) -> Result<Exec>;
}

/// Captured output of a finished git invocation.
#[derive(Clone, Debug)]
pub struct ExecOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Result of a bounded git invocation.
pub enum Exec {
    Completed(ExecOutput),
    TimedOut,
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI in a fixed repository directory.
pub struct RealGit {
    path: std::path::PathBuf,
}

impl RealGit {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    fn capture(output: std::process::Output) -> ExecOutput {
        ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl GitCli for RealGit {
    async fn run(&self, args: &[String]) -> Result<ExecOutput> {
        tracing::debug!("running: git {}", args.join(" "));
        let output = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .output()
            .await
            .context("Failed to execute git command")?;

        Ok(Self::capture(output))
    }

    async fn run_bounded(&self, args: &[String], timeout: Duration) -> Result<Exec> {
        tracing::debug!("running (bounded {:?}): git {}", timeout, args.join(" "));
        // kill_on_drop reaps the child when the timeout wins the race
        let future = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(timeout, future).await {
            Ok(output) => {
                let output = output.context("Failed to execute git command")?;
                Ok(Exec::Completed(Self::capture(output)))
            }
            Err(_) => Ok(Exec::TimedOut),
        }
    }
}
