//! Rule repository: SQLite persistence for auto-reply rules.
//!
//! Implements [`RuleSource`] and [`UsageSink`]; the admin CLI uses the CRUD methods directly.

use crate::error::StorageError;
use crate::models::{NewRule, RuleRecord, RuleStats, RuleUpdate};
use crate::repository::{RuleSource, UsageSink};
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::Utc;
use rule_matcher::{normalize_keywords, Rule};
use tracing::info;
use uuid::Uuid;

const SELECT_RULES: &str = "SELECT id, question, answer, keywords, is_active, usage_count, created_by, created_at \
     FROM auto_reply_rules";

#[derive(Clone)]
pub struct RuleRepository {
    pool_manager: SqlitePoolManager,
}

impl RuleRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS auto_reply_rules (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                keywords TEXT NOT NULL,
                is_active INTEGER NOT NULL,
                usage_count INTEGER NOT NULL DEFAULT 0,
                created_by TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_auto_reply_rules_created_at ON auto_reply_rules(created_at)",
        )
        .execute(pool)
        .await?;

        info!("auto_reply_rules table ready");
        Ok(())
    }

    /// Stores a new rule with a generated id, zero usage and the current time.
    pub async fn create(&self, new_rule: NewRule) -> Result<Rule, StorageError> {
        let rule = Rule {
            id: Uuid::new_v4().to_string(),
            question: new_rule.question,
            answer: new_rule.answer,
            keywords: normalize_keywords(&new_rule.keywords),
            is_active: new_rule.is_active,
            usage_count: 0,
            created_by: new_rule.created_by,
            created_at: Some(Utc::now()),
        };

        sqlx::query(
            r#"
            INSERT INTO auto_reply_rules (id, question, answer, keywords, is_active, usage_count, created_by, created_at)
            VALUES (?, ?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(&rule.id)
        .bind(&rule.question)
        .bind(&rule.answer)
        .bind(serde_json::to_string(&rule.keywords)?)
        .bind(rule.is_active)
        .bind(&rule.created_by)
        .bind(rule.created_at.unwrap_or_else(Utc::now))
        .execute(self.pool_manager.pool())
        .await?;

        info!(rule_id = %rule.id, keywords = ?rule.keywords, "Created auto-reply rule");
        Ok(rule)
    }

    pub async fn get(&self, rule_id: &str) -> Result<Option<Rule>, StorageError> {
        let sql = format!("{} WHERE id = ?", SELECT_RULES);
        let record = sqlx::query_as::<_, RuleRecord>(&sql)
            .bind(rule_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(record.map(RuleRecord::into_rule))
    }

    /// Applies a partial edit to question, answer and keywords. Usage and activity are untouched.
    pub async fn update(&self, rule_id: &str, update: RuleUpdate) -> Result<Rule, StorageError> {
        let mut rule = self
            .get(rule_id)
            .await?
            .ok_or_else(|| StorageError::NotFound(rule_id.to_string()))?;

        if let Some(question) = update.question {
            rule.question = question;
        }
        if let Some(answer) = update.answer {
            rule.answer = answer;
        }
        if let Some(keywords) = update.keywords {
            rule.keywords = normalize_keywords(&keywords);
        }

        sqlx::query("UPDATE auto_reply_rules SET question = ?, answer = ?, keywords = ? WHERE id = ?")
            .bind(&rule.question)
            .bind(&rule.answer)
            .bind(serde_json::to_string(&rule.keywords)?)
            .bind(rule_id)
            .execute(self.pool_manager.pool())
            .await?;

        info!(rule_id = %rule_id, "Updated auto-reply rule");
        Ok(rule)
    }

    pub async fn set_active(&self, rule_id: &str, is_active: bool) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE auto_reply_rules SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(rule_id)
            .execute(self.pool_manager.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(rule_id.to_string()));
        }
        info!(rule_id = %rule_id, is_active, "Set auto-reply rule activity");
        Ok(())
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, rule_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM auto_reply_rules WHERE id = ?")
            .bind(rule_id)
            .execute(self.pool_manager.pool())
            .await?;

        info!(rule_id = %rule_id, deleted = result.rows_affected(), "Deleted auto-reply rule");
        Ok(result.rows_affected() > 0)
    }

    /// Upserts rules by id.
    ///
    /// Existing rows keep their position in creation order. A stored usage count is never lowered
    /// by an import. Rules without `created_at` get the current time.
    pub async fn import(&self, rules: &[Rule]) -> Result<usize, StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        for rule in rules {
            let usage_count = i64::try_from(rule.usage_count)
                .map_err(|_| StorageError::InvalidData(format!("usageCount too large for rule {}", rule.id)))?;

            sqlx::query(
                r#"
                INSERT INTO auto_reply_rules (id, question, answer, keywords, is_active, usage_count, created_by, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    question = excluded.question,
                    answer = excluded.answer,
                    keywords = excluded.keywords,
                    is_active = excluded.is_active,
                    usage_count = MAX(usage_count, excluded.usage_count),
                    created_by = excluded.created_by
                "#,
            )
            .bind(&rule.id)
            .bind(&rule.question)
            .bind(&rule.answer)
            .bind(serde_json::to_string(&normalize_keywords(&rule.keywords))?)
            .bind(rule.is_active)
            .bind(usage_count)
            .bind(&rule.created_by)
            .bind(rule.created_at.unwrap_or_else(Utc::now))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(count = rules.len(), "Imported auto-reply rules");
        Ok(rules.len())
    }

    pub async fn stats(&self) -> Result<RuleStats, StorageError> {
        let (total_rules, active_rules, total_usage): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(is_active), 0), COALESCE(SUM(usage_count), 0) FROM auto_reply_rules",
        )
        .fetch_one(self.pool_manager.pool())
        .await?;

        Ok(RuleStats {
            total_rules,
            active_rules,
            total_usage,
        })
    }
}

#[async_trait]
impl RuleSource for RuleRepository {
    async fn list_rules(&self) -> Result<Vec<Rule>, StorageError> {
        let sql = format!("{} ORDER BY created_at ASC, rowid ASC", SELECT_RULES);
        let records = sqlx::query_as::<_, RuleRecord>(&sql)
            .fetch_all(self.pool_manager.pool())
            .await?;
        Ok(records.into_iter().map(RuleRecord::into_rule).collect())
    }
}

#[async_trait]
impl UsageSink for RuleRepository {
    async fn increment_usage(&self, rule_id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE auto_reply_rules SET usage_count = usage_count + 1 WHERE id = ?")
            .bind(rule_id)
            .execute(self.pool_manager.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(rule_id.to_string()));
        }
        Ok(())
    }
}
