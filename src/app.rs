use anyhow::Result;

use crate::config::Config;
use crate::ops::git::GitCli;
use crate::runner::Runner;
use crate::runner::Step;

pub struct App<G: GitCli> {
    pub config: Config,
    pub git: G,
}

impl<G: GitCli> App<G> {
    pub fn new(config: Config, git: G) -> Self {
        Self { config, git }
    }

    pub(crate) fn runner(&self) -> Runner<'_, G> {
        Runner::new(&self.git)
    }
}

/// Shared query helpers for App
impl<G: GitCli> App<G> {
    /// Check whether a local branch exists.
    pub(crate) async fn branch_exists(&self, branch: &str) -> Result<bool> {
        let args = argv(&["rev-parse", "--verify", branch]);
        Ok(self.git.run(&args).await?.success())
    }

    /// Check whether anything is staged for commit.
    /// `git diff --cached --quiet` exits zero when the index is clean.
    pub(crate) async fn has_staged_changes(&self) -> Result<bool> {
        let args = argv(&["diff", "--cached", "--quiet"]);
        Ok(!self.git.run(&args).await?.success())
    }

    /// Switch to `branch`, creating it when it does not exist yet.
    ///
    /// The existing-branch path switches instead of recreating, so selecting
    /// the same branch twice never errors. When the branch is created and
    /// `push_after_create` is set, it is pushed upstream as a soft step.
    pub(crate) async fn select_branch(
        &self,
        branch: &str,
        hard_stop: bool,
        push_after_create: bool,
        stdout: &mut impl std::io::Write,
    ) -> Result<()> {
        let runner = self.runner();

        if self.branch_exists(branch).await? {
            let checkout = if hard_stop {
                Step::hard(&["checkout", branch])
            } else {
                Step::soft(&["checkout", branch])
            };
            if runner.run_step(&checkout, stdout).await?.is_success() {
                writeln!(stdout, "✓ Switched to existing {} branch", branch)?;
            }
            return Ok(());
        }

        let create = if hard_stop {
            Step::hard(&["checkout", "-b", branch])
        } else {
            Step::soft(&["checkout", "-b", branch])
        };
        if !runner.run_step(&create, stdout).await?.is_success() {
            return Ok(());
        }
        if push_after_create {
            runner
                .run_step(&Step::soft(&["push", "-u", "origin", branch]), stdout)
                .await?;
        }
        writeln!(stdout, "✓ Created and switched to {} branch", branch)?;

        Ok(())
    }
}

/// Build an owned argument vector for direct queries.
pub(crate) fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

// -----------------------------------------------------------------------------
// Tests
