//! Row model for the `auto_reply_rules` table.

use chrono::{DateTime, Utc};
use rule_matcher::Rule;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One stored rule. `keywords` holds a JSON array of strings.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RuleRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub keywords: String,
    pub is_active: bool,
    pub usage_count: i64,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RuleRecord {
    /// Converts to the matcher's [`Rule`]. A malformed keyword column becomes an empty list.
    pub fn into_rule(self) -> Rule {
        let keywords = match serde_json::from_str::<Vec<String>>(&self.keywords) {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!(rule_id = %self.id, error = %e, "Malformed keywords column, treating as empty");
                Vec::new()
            }
        };
        Rule {
            id: self.id,
            question: self.question,
            answer: self.answer,
            keywords,
            is_active: self.is_active,
            usage_count: u64::try_from(self.usage_count).unwrap_or(0),
            created_by: self.created_by,
            created_at: Some(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keywords: &str, usage_count: i64) -> RuleRecord {
        RuleRecord {
            id: "r1".to_string(),
            question: "q".to_string(),
            answer: "a".to_string(),
            keywords: keywords.to_string(),
            is_active: true,
            usage_count,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_rule_decodes_keywords() {
        let rule = record(r#"["post","upload"]"#, 3).into_rule();
        assert_eq!(rule.keywords, vec!["post", "upload"]);
        assert_eq!(rule.usage_count, 3);
        assert!(rule.created_at.is_some());
    }

    #[test]
    fn test_into_rule_malformed_keywords_is_empty() {
        assert!(record("not json", 0).into_rule().keywords.is_empty());
        assert!(record("", 0).into_rule().keywords.is_empty());
    }
}
