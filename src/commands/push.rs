use anyhow::Result;

use crate::App;
use crate::app::argv;
use crate::ops::git::GitCli;
use crate::runner::Step;

impl<G: GitCli> App<G> {
    /// Stage, commit and push local changes.
    ///
    /// Every step is soft: the run always completes, reporting what it
    /// could and could not do. The push itself is bounded by
    /// `config.push_timeout` and a timeout is only a warning.
    pub async fn cmd_push(&self, stdout: &mut impl std::io::Write) -> Result<()> {
        let runner = self.runner();
        let banner = "=".repeat(70);

        writeln!(stdout, "{}", banner)?;
        writeln!(stdout, "GIT PUSH OPERATIONS")?;
        writeln!(stdout, "{}", banner)?;

        writeln!(stdout)?;
        writeln!(stdout, "1. Configuring Git...")?;
        runner
            .run_sequence(
                &[
                    Step::soft(&["config", "user.email", &self.config.user_email]),
                    Step::soft(&["config", "user.name", &self.config.user_name]),
                ],
                stdout,
            )
            .await?;

        writeln!(stdout)?;
        writeln!(stdout, "2. Checking Git Status...")?;
        match self.git.run(&argv(&["status", "--porcelain"])).await {
            Ok(out) if out.stdout.is_empty() => writeln!(stdout, "✓ No uncommitted changes")?,
            Ok(out) => {
                writeln!(stdout, "Uncommitted changes:")?;
                write!(stdout, "{}", out.stdout)?;
            }
            Err(e) => writeln!(stdout, "⚠ Error checking status: {}", e)?,
        }

        writeln!(stdout)?;
        writeln!(stdout, "3. Staging Files...")?;
        runner.run_step(&Step::soft(&["add", "."]), stdout).await?;

        writeln!(stdout)?;
        writeln!(stdout, "4. Checking for Changes to Commit...")?;
        if self.has_staged_changes().await? {
            writeln!(stdout, "✓ Changes found - proceeding with commit")?;

            writeln!(stdout)?;
            writeln!(stdout, "5. Committing Changes...")?;
            runner
                .run_step(
                    &Step::soft(&["commit", "-m", &self.config.commit_message]),
                    stdout,
                )
                .await?;
        } else {
            writeln!(stdout, "ℹ No staged changes to commit")?;
        }

        writeln!(stdout)?;
        writeln!(stdout, "6. Current Branch Information...")?;
        match self.git.run(&argv(&["branch", "--show-current"])).await {
            Ok(out) => writeln!(stdout, "Current branch: {}", out.stdout.trim())?,
            Err(e) => writeln!(stdout, "⚠ Error getting current branch: {}", e)?,
        }

        writeln!(stdout)?;
        writeln!(stdout, "7. Checking Remote Configuration...")?;
        match self.git.run(&argv(&["remote", "-v"])).await {
            Ok(out) if out.stdout.is_empty() => {
                writeln!(stdout, "⚠ No remote repository configured")?
            }
            Ok(out) => {
                writeln!(stdout, "✓ Remote configured:")?;
                write!(stdout, "{}", out.stdout)?;
            }
            Err(e) => writeln!(stdout, "⚠ Error checking remote: {}", e)?,
        }

        writeln!(stdout)?;
        writeln!(stdout, "8. Recent Commits...")?;
        match self.git.run(&argv(&["log", "--oneline", "-5"])).await {
            Ok(out) => write!(stdout, "{}", out.stdout)?,
            Err(e) => writeln!(stdout, "⚠ Error getting logs: {}", e)?,
        }

        writeln!(stdout)?;
        writeln!(stdout, "9. Attempting to Push Changes...")?;
        let push = Step::bounded(&["push", "-u", "origin", "HEAD"], self.config.push_timeout);
        if runner.run_step(&push, stdout).await?.is_success() {
            writeln!(stdout, "✓ Changes pushed successfully!")?;
        }

        writeln!(stdout)?;
        writeln!(stdout, "{}", banner)?;
        writeln!(stdout, "PUSH OPERATIONS COMPLETED")?;
        writeln!(stdout, "{}", banner)?;

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
