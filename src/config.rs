use std::path::PathBuf;
use std::time::Duration;

/// How long a push is allowed to run before it is abandoned.
pub const DEFAULT_PUSH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    /// Repository the commands operate on.
    pub repo_path: PathBuf,
    /// Committer identity written with `git config`.
    pub user_email: String,
    pub user_name: String,
    /// Long-lived integration branch.
    pub develop_branch: String,
    /// Feature branch created from it.
    pub feature_branch: String,
    /// Message used when committing staged changes.
    pub commit_message: String,
    pub push_timeout: Duration,
}

impl Config {
    /// Create a config for a repository path with default settings.
    pub fn new(repo_path: PathBuf) -> Self {
        Self {
            repo_path,
            user_email: "developer@example.com".to_string(),
            user_name: "Developer".to_string(),
            develop_branch: "develop".to_string(),
            feature_branch: "feature/initial-structure".to_string(),
            commit_message: "Checkpoint local changes".to_string(),
            push_timeout: DEFAULT_PUSH_TIMEOUT,
        }
    }

    /// Default config for tests
    pub fn default_for_tests(repo_path: PathBuf) -> Self {
        Self::new(repo_path)
    }
}
