//! # chatbot-core
//!
//! Core types and traits for the community-chat auto-reply bot: [`Handler`], message and user types,
//! error types, and tracing initialization. Transport-agnostic; used by handler-chain and handlers.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChatbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, MessageDirection, User};
