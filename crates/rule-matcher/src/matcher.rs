//! First-match-wins selection over an ordered rule snapshot.

use crate::rule::Rule;
use crate::similarity::{similarity, SIMILARITY_THRESHOLD};

/// Why a rule fired.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchReason {
    /// The lowercased message contains this keyword.
    Keyword(String),
    /// Word-overlap score with the rule's question, above [`SIMILARITY_THRESHOLD`].
    Similarity(f64),
}

/// The winning rule and the condition it satisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch<'a> {
    pub rule: &'a Rule,
    pub reason: MatchReason,
}

/// Returns the first keyword of `rule` contained in `lowered_message`.
///
/// Keywords are lowercased before the substring test. Blank keywords never hit.
pub fn keyword_hit<'r>(lowered_message: &str, rule: &'r Rule) -> Option<&'r str> {
    rule.keywords
        .iter()
        .filter(|keyword| !keyword.trim().is_empty())
        .find(|keyword| lowered_message.contains(keyword.to_lowercase().as_str()))
        .map(String::as_str)
}

/// Returns the first active rule (in `rules` order) that hits, with the reason.
///
/// For each rule the keyword test runs before the similarity test. Later rules are not scored
/// once one qualifies.
pub fn find_match<'a>(message: &str, rules: &'a [Rule]) -> Option<RuleMatch<'a>> {
    let lowered = message.to_lowercase();

    rules.iter().filter(|rule| rule.is_active).find_map(|rule| {
        if let Some(keyword) = keyword_hit(&lowered, rule) {
            return Some(RuleMatch {
                rule,
                reason: MatchReason::Keyword(keyword.to_string()),
            });
        }
        let score = similarity(&lowered, &rule.question.to_lowercase());
        (score > SIMILARITY_THRESHOLD).then(|| RuleMatch {
            rule,
            reason: MatchReason::Similarity(score),
        })
    })
}

/// Returns the rule whose answer should be sent in reply to `message`, if any.
pub fn find_response<'a>(message: &str, rules: &'a [Rule]) -> Option<&'a Rule> {
    find_match(message, rules).map(|m| m.rule)
}
