//! Inputs for creating and editing rules.
//!
//! Used by RuleRepository::create and RuleRepository::update.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRule {
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
}

impl NewRule {
    /// An active rule with no provenance.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords,
            is_active: true,
            created_by: None,
        }
    }
}

/// Partial edit; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl RuleUpdate {
    pub fn is_empty(&self) -> bool {
        self.question.is_none() && self.answer.is_none() && self.keywords.is_none()
    }
}
