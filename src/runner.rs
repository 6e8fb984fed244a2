use std::time::Duration;

use anyhow::Result;
use anyhow::bail;
use colored::Colorize;
use log::warn;

use crate::ops::git::Exec;
use crate::ops::git::ExecOutput;
use crate::ops::git::GitCli;

// -----------------------------------------------------------------------------
// Types

/// One git invocation plus its failure severity.
pub struct Step {
    pub args: Vec<String>,
    pub hard_stop: bool,
    pub timeout: Option<Duration>,
}

impl Step {
    /// A step whose failure is logged but does not stop the run.
    pub fn soft(args: &[&str]) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            hard_stop: false,
            timeout: None,
        }
    }

    /// A step whose failure aborts the whole run.
    pub fn hard(args: &[&str]) -> Self {
        Self {
            hard_stop: true,
            ..Self::soft(args)
        }
    }

    /// A soft step that gives up after `timeout`.
    pub fn bounded(args: &[&str], timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::soft(args)
        }
    }

    /// The command as it would be typed at a shell prompt.
    pub fn display(&self) -> String {
        format!("git {}", self.args.join(" "))
    }
}

/// Outcome of a single step that did not abort the run.
#[derive(Debug)]
pub enum StepOutcome {
    /// The command exited zero.
    Success(ExecOutput),
    /// The command failed but the step is soft; carries the captured error.
    SoftFailure(String),
    /// A bounded command did not finish in time.
    TimedOut,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

// -----------------------------------------------------------------------------
// Runner

/// Executes steps in program order, one subprocess at a time.
pub struct Runner<'a, G: GitCli> {
    git: &'a G,
}

impl<'a, G: GitCli> Runner<'a, G> {
    pub fn new(git: &'a G) -> Self {
        Self { git }
    }

    /// Execute one step, writing a confirmation or warning line for it.
    ///
    /// Returns `Err` only when a hard-stop step fails (non-zero exit or the
    /// command could not be run at all).
    pub async fn run_step(
        &self,
        step: &Step,
        stdout: &mut impl std::io::Write,
    ) -> Result<StepOutcome> {
        if step.args.is_empty() {
            bail!("Refusing to run an empty step");
        }

        let exec = match step.timeout {
            Some(timeout) => self.git.run_bounded(&step.args, timeout).await,
            None => self.git.run(&step.args).await.map(Exec::Completed),
        };

        let output = match exec {
            Ok(Exec::Completed(output)) => output,
            Ok(Exec::TimedOut) => {
                writeln!(stdout, "{} {} timed out", "⚠".yellow(), step.display())?;
                warn!("{} timed out", step.display());
                return Ok(StepOutcome::TimedOut);
            }
            Err(e) => {
                if step.hard_stop {
                    return Err(e.context(format!("{} could not be run", step.display())));
                }
                writeln!(stdout, "{} {}: {}", "⚠".yellow(), step.display(), e)?;
                warn!("{}: {}", step.display(), e);
                return Ok(StepOutcome::SoftFailure(e.to_string()));
            }
        };

        if output.success() {
            writeln!(stdout, "{} Executed: {}", "✓".green(), step.display())?;
            return Ok(StepOutcome::Success(output));
        }

        let error = output.stderr.trim().to_string();
        if step.hard_stop {
            bail!("{} failed: {}", step.display(), error);
        }

        writeln!(stdout, "{} {}: {}", "⚠".yellow(), step.display(), error)?;
        warn!("{}: {}", step.display(), error);
        Ok(StepOutcome::SoftFailure(error))
    }

    /// Execute steps in order. Soft failures are logged and the run continues;
    /// the first hard-stop failure aborts the remainder of the sequence.
    pub async fn run_sequence(
        &self,
        steps: &[Step],
        stdout: &mut impl std::io::Write,
    ) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(steps.len());
        for step in steps {
            outcomes.push(self.run_step(step, stdout).await?);
        }
        Ok(outcomes)
    }
}

// -----------------------------------------------------------------------------
// Tests
