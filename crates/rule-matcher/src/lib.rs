//! # rule-matcher
//!
//! Decides whether an incoming chat message should trigger a canned auto-reply.
//! Pure and synchronous: takes a message and an ordered rule snapshot, returns the
//! first active rule that hits by keyword or by question similarity.

mod matcher;
mod rule;
mod similarity;

pub use matcher::{find_match, find_response, keyword_hit, MatchReason, RuleMatch};
pub use rule::{normalize_keywords, Rule};
pub use similarity::{similarity, SIMILARITY_THRESHOLD};
