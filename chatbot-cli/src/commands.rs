//! Command implementations. Output goes to a caller-supplied writer so commands are testable.

use anyhow::{Context, Result};
use chatbot_core::{Chat, HandlerResponse, Message, User};
use handler_chain::HandlerChain;
use handlers::{AutoReplyHandler, LoggingHandler};
use rule_matcher::Rule;
use std::io::Write;
use std::sync::Arc;
use storage::{NewRule, RuleRepository, RuleSource, RuleUpdate};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::cli::Commands;

/// Logging + auto-reply, with the repository as both rule source and usage sink.
pub fn build_chain(repo: &RuleRepository) -> HandlerChain {
    let repo = Arc::new(repo.clone());
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AutoReplyHandler::new(repo.clone(), repo)))
}

fn cli_chat(chat_id: i64) -> Chat {
    Chat {
        id: chat_id,
        chat_type: "community".to_string(),
    }
}

fn cli_user(user_id: i64) -> User {
    User {
        id: user_id,
        username: Some("cli".to_string()),
        display_name: None,
    }
}

/// Runs one message through the chain; returns the reply text if a rule fired.
pub async fn ask(chain: &HandlerChain, chat: Chat, user: User, text: &str) -> Result<Option<String>> {
    let message = Message::incoming_text(user, chat, text);
    match chain.handle(&message).await? {
        HandlerResponse::Reply(answer) => Ok(Some(answer)),
        _ => Ok(None),
    }
}

/// Treats each input line as an incoming chat message and writes `bot> <answer>` for each reply.
/// Returns the number of replies sent.
pub async fn chat_loop<R, W>(chain: &HandlerChain, reader: R, out: &mut W, chat_id: i64, user_id: i64) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut replies = 0;
    while let Some(line) = lines.next_line().await.context("Failed to read chat input")? {
        if let Some(answer) = ask(chain, cli_chat(chat_id), cli_user(user_id), &line).await? {
            writeln!(out, "bot> {}", answer)?;
            replies += 1;
        }
    }
    info!(replies, "Chat input closed");
    Ok(replies)
}

fn format_rule(rule: &Rule) -> String {
    format!(
        "{}  [{}]  uses={}  keywords={}  question={:?}  answer={:?}",
        rule.id,
        if rule.is_active { "active" } else { "inactive" },
        rule.usage_count,
        rule.keywords.join(","),
        rule.question,
        rule.answer
    )
}

/// Dispatches every subcommand except `chat`, which needs stdin.
pub async fn run<W: Write>(command: Commands, repo: &RuleRepository, out: &mut W) -> Result<()> {
    match command {
        Commands::Add {
            question,
            answer,
            keywords,
            inactive,
            created_by,
        } => {
            let rule = repo
                .create(NewRule {
                    question,
                    answer,
                    keywords,
                    is_active: !inactive,
                    created_by,
                })
                .await?;
            writeln!(out, "{}", rule.id)?;
        }
        Commands::List => {
            for rule in repo.list_rules().await? {
                writeln!(out, "{}", format_rule(&rule))?;
            }
        }
        Commands::Show { id } => {
            let rule = repo
                .get(&id)
                .await?
                .with_context(|| format!("No rule with id {}", id))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&rule)?)?;
        }
        Commands::Edit {
            id,
            question,
            answer,
            keywords,
            clear_keywords,
        } => {
            let keywords = if clear_keywords {
                Some(Vec::new())
            } else if keywords.is_empty() {
                None
            } else {
                Some(keywords)
            };
            let update = RuleUpdate {
                question,
                answer,
                keywords,
            };
            if update.is_empty() {
                anyhow::bail!("Nothing to edit: pass --question, --answer, --keyword or --clear-keywords");
            }
            let rule = repo.update(&id, update).await?;
            writeln!(out, "{}", format_rule(&rule))?;
        }
        Commands::Enable { id } => {
            repo.set_active(&id, true).await?;
            writeln!(out, "enabled {}", id)?;
        }
        Commands::Disable { id } => {
            repo.set_active(&id, false).await?;
            writeln!(out, "disabled {}", id)?;
        }
        Commands::Remove { id } => {
            if !repo.delete(&id).await? {
                anyhow::bail!("No rule with id {}", id);
            }
            writeln!(out, "removed {}", id)?;
        }
        Commands::Import { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let rules: Vec<Rule> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of rules", file.display()))?;
            let count = repo.import(&rules).await?;
            writeln!(out, "imported {} rules", count)?;
        }
        Commands::Export { file } => {
            let json = serde_json::to_string_pretty(&repo.list_rules().await?)?;
            match file {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    writeln!(out, "exported to {}", path.display())?;
                }
                None => writeln!(out, "{}", json)?,
            }
        }
        Commands::Stats => {
            let stats = repo.stats().await?;
            writeln!(
                out,
                "rules={} active={} total_usage={}",
                stats.total_rules, stats.active_rules, stats.total_usage
            )?;
        }
        Commands::Ask { message } => {
            let chain = build_chain(repo);
            match ask(&chain, cli_chat(1), cli_user(1), &message).await? {
                Some(answer) => writeln!(out, "{}", answer)?,
                None => writeln!(out, "(no auto-reply)")?,
            }
        }
        Commands::Chat { chat_id, user_id } => {
            let chain = build_chain(repo);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            chat_loop(&chain, stdin, out, chat_id, user_id).await?;
        }
    }
    Ok(())
}
