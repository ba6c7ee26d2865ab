//! Auto-reply handler: answers a chat message with the first matching admin-curated rule.

use async_trait::async_trait;
use chatbot_core::{Handler, HandlerResponse, Message, MessageDirection, Result};
use rule_matcher::{find_match, MatchReason};
use std::sync::Arc;
use storage::{RuleSource, UsageSink};
use tracing::{error, info, instrument};

/// Loads the rule snapshot per message, picks a rule with [`find_match`], counts the firing
/// and replies with the rule's answer.
///
/// Storage failures never surface as handler errors: a failed load means no auto-reply, a failed
/// increment is logged and the reply still goes out.
pub struct AutoReplyHandler {
    rules: Arc<dyn RuleSource>,
    usage: Arc<dyn UsageSink>,
}

impl AutoReplyHandler {
    pub fn new(rules: Arc<dyn RuleSource>, usage: Arc<dyn UsageSink>) -> Self {
        Self { rules, usage }
    }
}

#[async_trait]
impl Handler for AutoReplyHandler {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // The bot's own replies must not trigger further replies.
        if message.direction == MessageDirection::Outgoing {
            return Ok(HandlerResponse::Ignore);
        }

        let rules = match self.rules.list_rules().await {
            Ok(rules) => rules,
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "Failed to load auto-reply rules");
                return Ok(HandlerResponse::Continue);
            }
        };

        let Some(hit) = find_match(&message.content, &rules) else {
            return Ok(HandlerResponse::Continue);
        };

        match &hit.reason {
            MatchReason::Keyword(keyword) => info!(
                rule_id = %hit.rule.id,
                keyword = %keyword,
                "step: auto-reply rule fired by keyword"
            ),
            MatchReason::Similarity(score) => info!(
                rule_id = %hit.rule.id,
                score = *score,
                "step: auto-reply rule fired by similarity"
            ),
        }

        if let Err(e) = self.usage.increment_usage(&hit.rule.id).await {
            error!(error = %e, rule_id = %hit.rule.id, "Failed to increment rule usage");
        }

        Ok(HandlerResponse::Reply(hit.rule.answer.clone()))
    }
}
