//! Unit tests for RuleRepository.
//!
//! Covers create/get, creation-order listing, partial update, activity toggling and delete.

use crate::models::{NewRule, RuleUpdate};
use crate::repository::RuleSource;
use crate::rule_repo::RuleRepository;
use crate::StorageError;

async fn memory_repo() -> RuleRepository {
    RuleRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_create_and_get() {
    let repo = memory_repo().await;

    let mut new_rule = NewRule::new(
        "How do I create a post?",
        "Use Upload.",
        vec!["Post".to_string(), " upload ".to_string(), "post".to_string()],
    );
    new_rule.created_by = Some("admin-1".to_string());
    let created = repo.create(new_rule).await.expect("Failed to create rule");

    assert_eq!(created.keywords, vec!["post", "upload"]);
    assert_eq!(created.usage_count, 0);
    assert!(created.is_active);

    let fetched = repo.get(&created.id).await.unwrap().expect("rule should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.question, "How do I create a post?");
    assert_eq!(fetched.answer, "Use Upload.");
    assert_eq!(fetched.keywords, vec!["post", "upload"]);
    assert_eq!(fetched.created_by.as_deref(), Some("admin-1"));
}

#[tokio::test]
async fn test_get_not_found() {
    let repo = memory_repo().await;
    assert!(repo.get("non-existent-id").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_rules_in_creation_order() {
    let repo = memory_repo().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let rule = repo
            .create(NewRule::new(format!("question {}", i), "answer", vec![]))
            .await
            .unwrap();
        ids.push(rule.id);
    }

    let listed: Vec<String> = repo.list_rules().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_list_rules_includes_inactive() {
    let repo = memory_repo().await;
    let mut inactive = NewRule::new("q", "a", vec!["kw".to_string()]);
    inactive.is_active = false;
    repo.create(inactive).await.unwrap();

    let rules = repo.list_rules().await.unwrap();
    assert_eq!(rules.len(), 1);
    assert!(!rules[0].is_active);
}

#[tokio::test]
async fn test_update_is_partial() {
    let repo = memory_repo().await;
    let rule = repo
        .create(NewRule::new("old question", "old answer", vec!["old".to_string()]))
        .await
        .unwrap();

    let updated = repo
        .update(
            &rule.id,
            RuleUpdate {
                answer: Some("new answer".to_string()),
                keywords: Some(vec!["NEW".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.question, "old question");
    assert_eq!(updated.answer, "new answer");
    assert_eq!(updated.keywords, vec!["new"]);

    let fetched = repo.get(&rule.id).await.unwrap().unwrap();
    assert_eq!(fetched.answer, "new answer");
    assert_eq!(fetched.keywords, vec!["new"]);
}

#[tokio::test]
async fn test_update_missing_rule() {
    let repo = memory_repo().await;
    let err = repo.update("missing", RuleUpdate::default()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[tokio::test]
async fn test_set_active_and_delete() {
    let repo = memory_repo().await;
    let rule = repo.create(NewRule::new("q", "a", vec![])).await.unwrap();

    repo.set_active(&rule.id, false).await.unwrap();
    assert!(!repo.get(&rule.id).await.unwrap().unwrap().is_active);

    assert!(repo.delete(&rule.id).await.unwrap());
    assert!(!repo.delete(&rule.id).await.unwrap());
    assert!(matches!(
        repo.set_active(&rule.id, true).await.unwrap_err(),
        StorageError::NotFound(_)
    ));
}
