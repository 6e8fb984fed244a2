use anyhow::Result;

use crate::App;
use crate::app::argv;
use crate::ops::git::GitCli;
use crate::runner::Step;

impl<G: GitCli> App<G> {
    /// Set up the develop and feature branches.
    ///
    /// 1. Configure the committer identity.
    /// 2. Initialize the repository when `.git` is missing.
    /// 3. Select the develop branch, creating and pushing it if needed.
    /// 4. Select the feature branch; failing to create it aborts the run.
    /// 5. Stage and commit pending changes, skipping the commit when
    ///    nothing is staged.
    /// 6. Print branch and commit information.
    pub async fn cmd_branch(&self, stdout: &mut impl std::io::Write) -> Result<()> {
        let runner = self.runner();

        // An existing identity is good enough, so these are soft
        runner
            .run_sequence(
                &[
                    Step::soft(&["config", "user.email", &self.config.user_email]),
                    Step::soft(&["config", "user.name", &self.config.user_name]),
                ],
                stdout,
            )
            .await?;

        if !self.config.repo_path.join(".git").exists() {
            writeln!(stdout)?;
            writeln!(stdout, "Initializing git repository...")?;
            runner
                .run_sequence(
                    &[
                        Step::hard(&["init"]),
                        // The identity config above soft-fails outside a
                        // repo, so it is repeated here before the commit
                        Step::hard(&["config", "user.email", &self.config.user_email]),
                        Step::hard(&["config", "user.name", &self.config.user_name]),
                        Step::hard(&["add", "."]),
                        Step::hard(&["commit", "-m", "Initial commit"]),
                    ],
                    stdout,
                )
                .await?;
            writeln!(stdout, "✓ Git repository initialized")?;
        }

        self.select_branch(&self.config.develop_branch, false, true, stdout)
            .await?;

        // Creating the feature branch is the one step that may abort the run
        self.select_branch(&self.config.feature_branch, true, false, stdout)
            .await?;

        runner.run_step(&Step::soft(&["add", "."]), stdout).await?;
        if self.has_staged_changes().await? {
            runner
                .run_step(
                    &Step::soft(&["commit", "-m", &self.config.commit_message]),
                    stdout,
                )
                .await?;
        } else {
            writeln!(stdout, "ℹ No staged changes to commit")?;
        }

        let banner = "=".repeat(60);
        writeln!(stdout)?;
        writeln!(stdout, "{}", banner)?;
        writeln!(stdout, "Git Branch Information:")?;
        writeln!(stdout, "{}", banner)?;
        match self.git.run(&argv(&["branch", "-a"])).await {
            Ok(out) => write!(stdout, "{}", out.stdout)?,
            Err(e) => writeln!(stdout, "⚠ Error listing branches: {}", e)?,
        }
        writeln!(stdout)?;
        writeln!(stdout, "Recent commits:")?;
        match self.git.run(&argv(&["log", "--oneline", "-5"])).await {
            Ok(out) => write!(stdout, "{}", out.stdout)?,
            Err(e) => writeln!(stdout, "⚠ Error listing commits: {}", e)?,
        }
        writeln!(stdout)?;
        writeln!(stdout, "{}", banner)?;
        writeln!(
            stdout,
            "✓ Feature branch '{}' created successfully!",
            self.config.feature_branch
        )?;
        writeln!(stdout, "{}", banner)?;

        Ok(())
    }
}
