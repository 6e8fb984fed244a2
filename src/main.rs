use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use gitprep::App;
use gitprep::Config;
use gitprep::ops::git::RealGit;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "gitprep")]
#[command(about = "Automate branch setup and commit/push for a repository", long_about = None)]
pub struct Cli {
    /// Repository to operate on
    #[arg(short, long, default_value = ".")]
    pub path: std::path::PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up the develop and feature branches (idempotent)
    Branch {
        /// Long-lived integration branch
        #[arg(long, default_value = "develop")]
        develop: String,
        /// Feature branch created from it
        #[arg(long, default_value = "feature/initial-structure")]
        feature: String,
        /// Commit message for any staged changes
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Stage, commit and push local changes
    Push {
        /// Commit message for any staged changes
        #[arg(short, long)]
        message: Option<String>,
    },
}

fn setup_logging() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let mut config = Config::new(cli.path);

    match cli.command {
        Commands::Branch {
            develop,
            feature,
            message,
        } => {
            config.develop_branch = develop;
            config.feature_branch = feature;
            if let Some(message) = message {
                config.commit_message = message;
            }
            let git = RealGit::new(config.repo_path.clone());
            let app = App::new(config, git);
            app.cmd_branch(&mut std::io::stdout()).await?
        }
        Commands::Push { message } => {
            if let Some(message) = message {
                config.commit_message = message;
            }
            let git = RealGit::new(config.repo_path.clone());
            let app = App::new(config, git);
            app.cmd_push(&mut std::io::stdout()).await?
        }
    }

    Ok(())
}
