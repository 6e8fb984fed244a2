use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Runs a git command in `dir`, discarding output.
pub async fn run_git(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;
    anyhow::ensure!(status.success(), "git {:?} failed", args);

    Ok(())
}

/// Runs a git command in `dir`, returning its stdout.
pub async fn git_stdout(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await?;
    anyhow::ensure!(output.status.success(), "git {:?} failed", args);

    Ok(String::from_utf8(output.stdout)?)
}

/// Creates a git repository in the given directory.
///
/// This initializes the repo with a pinned default branch name and sets
/// basic git config needed for commits. The directory should already exist.
pub async fn create_git_repo(dir: &Path) -> anyhow::Result<()> {
    run_git(dir, &["init", "-b", "main"]).await?;
    run_git(dir, &["config", "user.name", "Test User"]).await?;
    run_git(dir, &["config", "user.email", "test@example.com"]).await?;

    Ok(())
}

/// Creates a commit with a file.
pub async fn create_commit(
    dir: &Path,
    message: &str,
    filename: &str,
    contents: &str,
) -> anyhow::Result<()> {
    tokio::fs::write(dir.join(filename), contents).await?;
    run_git(dir, &["add", "."]).await?;
    run_git(dir, &["commit", "-m", message]).await?;

    Ok(())
}

/// Sets up a bare repository next to `dir` and configures it as origin,
/// so pushes succeed without touching the network.
pub async fn setup_bare_remote(dir: &Path, remote_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(remote_dir)?;
    run_git(remote_dir, &["init", "--bare"]).await?;
    let url = remote_dir.to_str().expect("utf-8 temp path");
    run_git(dir, &["remote", "add", "origin", url]).await?;

    Ok(())
}

/// The subject of the most recent commit.
pub async fn last_commit_message(dir: &Path) -> anyhow::Result<String> {
    Ok(git_stdout(dir, &["log", "-1", "--pretty=%s"])
        .await?
        .trim()
        .to_string())
}

pub fn setup_logging() -> anyhow::Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}

pub enum TestDir {
    Temp(tempfile::TempDir),
    Kept(std::path::PathBuf),
}

impl TestDir {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;

        if std::env::var("DEBUG_TESTS").is_ok() {
            let path = temp_dir.keep();
            eprintln!("Test directory kept at: {}", path.display());
            Ok(TestDir::Kept(path))
        } else {
            Ok(TestDir::Temp(temp_dir))
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            TestDir::Temp(t) => t.path(),
            TestDir::Kept(p) => p.as_path(),
        }
    }
}
