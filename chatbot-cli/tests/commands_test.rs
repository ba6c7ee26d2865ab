//! Integration tests for CLI commands against a temporary rule database.
//!
//! Covers: add/list, ask through the chain with usage counting, the stdin chat loop,
//! disable/enable, export/import round trip into a second database, and stats.

use chatbot_cli::commands::{build_chain, chat_loop, run};
use chatbot_cli::Commands;
use rule_matcher::Rule;
use storage::{RuleRepository, RuleSource};
use tempfile::TempDir;

async fn repo_in(dir: &TempDir, name: &str) -> RuleRepository {
    let url = format!("sqlite:{}", dir.path().join(name).display());
    RuleRepository::new(&url).await.expect("Failed to create repository")
}

fn ids(rules: &[Rule]) -> Vec<String> {
    rules.iter().map(|r| r.id.clone()).collect()
}

async fn run_to_string(command: Commands, repo: &RuleRepository) -> String {
    let mut out = Vec::new();
    run(command, repo, &mut out).await.expect("command failed");
    String::from_utf8(out).unwrap()
}

async fn add_scenario_rules(repo: &RuleRepository) -> (String, String) {
    let post = run_to_string(
        Commands::Add {
            question: "How do I create a post?".to_string(),
            answer: "Use Upload.".to_string(),
            keywords: vec!["post".to_string(), "upload".to_string()],
            inactive: false,
            created_by: Some("admin".to_string()),
        },
        repo,
    )
    .await;
    let profile = run_to_string(
        Commands::Add {
            question: "How do I edit my profile?".to_string(),
            answer: "Go to Profile.".to_string(),
            keywords: vec!["profile".to_string()],
            inactive: false,
            created_by: None,
        },
        repo,
    )
    .await;
    (post.trim().to_string(), profile.trim().to_string())
}

/// **Test: ask replies with the first matching rule and the winner's usage rises by one.**
#[tokio::test]
async fn test_ask_replies_and_counts_usage() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    let (post_id, profile_id) = add_scenario_rules(&repo).await;

    let reply = run_to_string(Commands::Ask { message: "how do i upload a photo".to_string() }, &repo).await;
    assert_eq!(reply, "Use Upload.\n");

    let none = run_to_string(Commands::Ask { message: "".to_string() }, &repo).await;
    assert_eq!(none, "(no auto-reply)\n");

    assert_eq!(repo.get(&post_id).await.unwrap().unwrap().usage_count, 1);
    assert_eq!(repo.get(&profile_id).await.unwrap().unwrap().usage_count, 0);
}

#[tokio::test]
async fn test_list_shows_rules_in_creation_order() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    let (post_id, profile_id) = add_scenario_rules(&repo).await;

    let listing = run_to_string(Commands::List, &repo).await;
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&post_id));
    assert!(lines[0].contains("keywords=post,upload"));
    assert!(lines[1].starts_with(&profile_id));
}

/// **Test: chat loop answers matching lines only.**
#[tokio::test]
async fn test_chat_loop_replies_per_line() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    add_scenario_rules(&repo).await;
    let chain = build_chain(&repo);

    let input: &[u8] = b"hello everyone\nwhere do I change my PROFILE picture\n\nnew post\n";
    let mut out = Vec::new();
    let replies = chat_loop(&chain, input, &mut out, 7, 42).await.unwrap();

    assert_eq!(replies, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "bot> Go to Profile.\nbot> Use Upload.\n");
}

/// **Test: disabled rule stops firing; enabling restores it.**
#[tokio::test]
async fn test_disable_and_enable() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    let (_, profile_id) = add_scenario_rules(&repo).await;

    run_to_string(Commands::Disable { id: profile_id.clone() }, &repo).await;
    let reply = run_to_string(Commands::Ask { message: "profile".to_string() }, &repo).await;
    assert_eq!(reply, "(no auto-reply)\n");

    run_to_string(Commands::Enable { id: profile_id }, &repo).await;
    let reply = run_to_string(Commands::Ask { message: "profile".to_string() }, &repo).await;
    assert_eq!(reply, "Go to Profile.\n");
}

#[tokio::test]
async fn test_edit_without_changes_fails() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    let (post_id, _) = add_scenario_rules(&repo).await;

    let mut out = Vec::new();
    let result = run(
        Commands::Edit {
            id: post_id,
            question: None,
            answer: None,
            keywords: vec![],
            clear_keywords: false,
        },
        &repo,
        &mut out,
    )
    .await;
    assert!(result.is_err());
}

/// **Test: export then import into a fresh database keeps ids, order and counts.**
#[tokio::test]
async fn test_export_import_into_new_database() {
    let dir = TempDir::new().unwrap();
    let source = repo_in(&dir, "source.db").await;
    add_scenario_rules(&source).await;
    run_to_string(Commands::Ask { message: "upload".to_string() }, &source).await;

    let file = dir.path().join("rules.json");
    run_to_string(Commands::Export { file: Some(file.clone()) }, &source).await;

    let target = repo_in(&dir, "target.db").await;
    let out = run_to_string(Commands::Import { file }, &target).await;
    assert_eq!(out, "imported 2 rules\n");

    let before = source.list_rules().await.unwrap();
    let after = target.list_rules().await.unwrap();
    assert_eq!(ids(&before), ids(&after));
    assert_eq!(after[0].usage_count, 1);
}

/// **Test: export to stdout is pure JSON that import accepts.**
///
/// **Setup:** Two rules, one fired once; `Export { file: None }` output captured and saved to a file.
/// **Action:** `Import` of that file into a fresh database.
/// **Expected:** Output parses as a rule array; target has the same ids and counts.
#[tokio::test]
async fn test_export_to_stdout_then_import() {
    let dir = TempDir::new().unwrap();
    let source = repo_in(&dir, "source.db").await;
    add_scenario_rules(&source).await;
    run_to_string(Commands::Ask { message: "my profile".to_string() }, &source).await;

    let exported = run_to_string(Commands::Export { file: None }, &source).await;
    let parsed: Vec<Rule> = serde_json::from_str(&exported).expect("export must be a JSON rule array");
    assert_eq!(parsed.len(), 2);

    let file = dir.path().join("stdout.json");
    std::fs::write(&file, &exported).unwrap();

    let target = repo_in(&dir, "target.db").await;
    let out = run_to_string(Commands::Import { file }, &target).await;
    assert_eq!(out, "imported 2 rules\n");

    let after = target.list_rules().await.unwrap();
    assert_eq!(ids(&parsed), ids(&after));
    assert_eq!(after[0].usage_count, 0);
    assert_eq!(after[1].usage_count, 1);
}

#[tokio::test]
async fn test_stats_and_remove() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir, "rules.db").await;
    let (post_id, _) = add_scenario_rules(&repo).await;
    run_to_string(Commands::Ask { message: "post".to_string() }, &repo).await;

    let stats = run_to_string(Commands::Stats, &repo).await;
    assert_eq!(stats, "rules=2 active=2 total_usage=1\n");

    run_to_string(Commands::Remove { id: post_id.clone() }, &repo).await;
    let mut out = Vec::new();
    assert!(run(Commands::Remove { id: post_id }, &repo, &mut out).await.is_err());
}
