//! Storage crate: auto-reply rule persistence behind the rule-source and usage-sink seams.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – RuleRecord, NewRule, RuleUpdate, RuleStats
//! - [`repository`] – RuleSource and UsageSink traits
//! - [`rule_repo`] – RuleRepository (SQLite)
//! - [`memory_store`] – InMemoryRuleStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod memory_store;
mod models;
mod repository;
mod rule_repo;
mod sqlite_pool;

#[cfg(test)]
mod rule_repo_test;

pub use error::StorageError;
pub use memory_store::InMemoryRuleStore;
pub use models::{NewRule, RuleRecord, RuleStats, RuleUpdate};
pub use repository::{RuleSource, UsageSink};
pub use rule_repo::RuleRepository;
pub use sqlite_pool::SqlitePoolManager;
