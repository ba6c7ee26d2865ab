//! Admin-curated auto-reply rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A question/answer/keyword entry. Field names serialize in camelCase to match document-store exports.
///
/// Missing `question`, `keywords`, `isActive` or `usageCount` deserialize as empty / `false` / `0`,
/// so a partial document can never match through the missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub question: String,
    pub answer: String,
    /// Trigger substrings, kept in insertion order for display.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Rule {
    /// Creates an active rule with zero usage and no provenance.
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            keywords,
            is_active: true,
            usage_count: 0,
            created_by: None,
            created_at: None,
        }
    }
}

/// Lowercases and trims keywords, dropping blanks and repeats while keeping first-seen order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if !keyword.is_empty() && !normalized.contains(&keyword) {
            normalized.push(keyword);
        }
    }
    normalized
}
