//! # Handlers for the auto-reply bot
//!
//! This crate provides handler implementations: logging and keyword/similarity auto-reply.

mod auto_reply_handler;
mod logging_handler;

#[cfg(test)]
mod test;

pub use auto_reply_handler::AutoReplyHandler;
pub use logging_handler::LoggingHandler;
