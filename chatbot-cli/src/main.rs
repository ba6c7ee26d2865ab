//! autoreply CLI: manage auto-reply rules and run the chat loop. Config from env and optional CLI args.

use anyhow::{Context, Result};
use chatbot_cli::{commands, AppConfig, Cli};
use chatbot_core::init_tracing;
use clap::Parser;
use storage::RuleRepository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.database_url.clone())?;
    config.validate()?;
    init_tracing(&config.log_file)?;

    let repo = RuleRepository::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open rule database {}", config.database_url))?;

    let mut stdout = std::io::stdout();
    commands::run(cli.command, &repo, &mut stdout).await
}
