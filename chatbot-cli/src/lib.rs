//! # chatbot-cli
//!
//! Admin CLI for auto-reply rules plus a stdin chat loop that runs messages through the handler chain.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};
pub use config::AppConfig;
