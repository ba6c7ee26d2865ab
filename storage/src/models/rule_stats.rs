//! Aggregate statistics for rules.
//!
//! Returned by RuleRepository::stats.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleStats {
    pub total_rules: i64,
    pub active_rules: i64,
    pub total_usage: i64,
}
