//! In-memory rule store for tests and ephemeral runs.
//!
//! The store uses `Arc<RwLock<>>`; increments happen under the write lock so concurrent
//! firings are all counted.

use crate::error::StorageError;
use crate::repository::{RuleSource, UsageSink};
use async_trait::async_trait;
use rule_matcher::Rule;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: Arc<RwLock<Vec<Rule>>>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `rules` in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules: Arc::new(RwLock::new(rules)),
        }
    }

    /// Appends a rule, keeping insertion order.
    pub async fn insert(&self, rule: Rule) {
        self.rules.write().await.push(rule);
    }

    pub async fn get(&self, rule_id: &str) -> Option<Rule> {
        self.rules.read().await.iter().find(|r| r.id == rule_id).cloned()
    }
}

#[async_trait]
impl RuleSource for InMemoryRuleStore {
    async fn list_rules(&self) -> Result<Vec<Rule>, StorageError> {
        Ok(self.rules.read().await.clone())
    }
}

#[async_trait]
impl UsageSink for InMemoryRuleStore {
    async fn increment_usage(&self, rule_id: &str) -> Result<(), StorageError> {
        let mut rules = self.rules.write().await;
        let rule = rules
            .iter_mut()
            .find(|r| r.id == rule_id)
            .ok_or_else(|| StorageError::NotFound(rule_id.to_string()))?;
        rule.usage_count += 1;
        Ok(())
    }
}
