//! Boundary traits between the auto-reply handler and whatever persists rules.

use crate::error::StorageError;
use async_trait::async_trait;
use rule_matcher::Rule;

/// Read side: the current rules visible to a chat.
#[async_trait]
pub trait RuleSource: Send + Sync {
    /// All rules, active or not, oldest first. Implementations must not reorder or dedup.
    async fn list_rules(&self) -> Result<Vec<Rule>, StorageError>;
}

/// Write side: persisted usage counter.
#[async_trait]
pub trait UsageSink: Send + Sync {
    /// Adds exactly 1 to the rule's `usage_count`.
    ///
    /// Must be an atomic increment in the backing store, never read-then-write, so concurrent
    /// firings are not lost.
    async fn increment_usage(&self, rule_id: &str) -> Result<(), StorageError>;
}

