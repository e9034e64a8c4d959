use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::profile::ProfileAction;

#[derive(Parser)]
#[command(name = "stallion")]
#[command(about = "MMSU Stallion AI Companion - university assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat with the Stallion assistant
    Chat,
    /// List catalog course offerings
    Courses {
        /// Restrict to one college (full or partial name)
        #[arg(long)]
        college: Option<String>,
    },
    /// List university announcements
    Announcements {
        /// Restrict to one category (academic, event, scholarship, enrollment)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show or edit the stored user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => commands::chat::run().await,
        Commands::Courses { college } => commands::catalog::courses(college.as_deref()).await,
        Commands::Announcements { category } => {
            commands::catalog::announcements(category.as_deref()).await
        }
        Commands::Profile { action } => commands::profile::run(action).await,
    }
}
