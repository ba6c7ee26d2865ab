//! Persistence models for auto-reply rules.

mod new_rule;
mod rule_record;
mod rule_stats;

pub use new_rule::{NewRule, RuleUpdate};
pub use rule_record::RuleRecord;
pub use rule_stats::RuleStats;
