//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autoreply")]
#[command(about = "Community chat auto-reply: manage rules, test messages, run a chat loop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule database URL; overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a rule.
    Add {
        #[arg(short, long)]
        question: String,
        #[arg(short, long)]
        answer: String,
        /// Trigger keyword; repeat for several.
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Create the rule disabled.
        #[arg(long)]
        inactive: bool,
        #[arg(long)]
        created_by: Option<String>,
    },
    /// List rules in matching order.
    List,
    /// Print one rule as JSON.
    Show { id: String },
    /// Edit question, answer or keywords of a rule.
    Edit {
        id: String,
        #[arg(short, long)]
        question: Option<String>,
        #[arg(short, long)]
        answer: Option<String>,
        /// Replaces all keywords; repeat for several.
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Remove all keywords (rule then fires by similarity only).
        #[arg(long, conflicts_with = "keywords")]
        clear_keywords: bool,
    },
    Enable { id: String },
    Disable { id: String },
    Remove { id: String },
    /// Upsert rules from a JSON array file.
    Import { file: PathBuf },
    /// Write all rules as a JSON array to a file or stdout.
    Export { file: Option<PathBuf> },
    /// Rule counts and total usage.
    Stats,
    /// Run one message through the auto-reply chain and print the reply.
    Ask { message: String },
    /// Read chat messages from stdin, one per line, and print auto-replies.
    Chat {
        #[arg(long, default_value = "1")]
        chat_id: i64,
        #[arg(long, default_value = "1")]
        user_id: i64,
    },
}
