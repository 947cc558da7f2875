//! Integration tests for the BCS SDK
//!
//! A small corpus is written to a temporary directory and queried through
//! the client.

use bcs_domain::{CodeAddress, Tier};
use bcs_sdk::{BcsClient, SdkError, SearchQuery, CONTENT_SEPARATOR};
use bcs_store::{IndexConfig, Resolver, TierSelection};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn corpus() -> (TempDir, BcsClient) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    for tier in Tier::CORE {
        write(root, &format!("01-script-structure/00-section.{}.md", tier), "# Script Structure\n");
        write(
            root,
            &format!("01-script-structure/02-shebang.{}.md", tier),
            &format!("## Shebang [BCS0102]\n{} text\nUse #!/usr/bin/env bash\nend\n", tier),
        );
        write(root, &format!("02-variables/00-section.{}.md", tier), "# Variables\n");
    }
    write(root, "01-script-structure/00-script-structure.rulet.md", "- [BCS0102] Use env bash\n");
    let client = BcsClient::open(&IndexConfig::new(root)).unwrap();
    (dir, client)
}

#[test]
fn test_decode_preserves_order_and_errors() {
    let (_dir, client) = corpus();
    let results = client.decode_to_path(
        &["BCS0102", "BCS9999", "BCS102", "0102"],
        TierSelection::Exact(Tier::Complete),
    );

    assert_eq!(results.len(), 4);
    assert!(results[0].as_ref().unwrap().paths()[0].ends_with("02-shebang.complete.md"));
    assert!(matches!(results[1], Err(SdkError::CodeNotFound(_))));
    assert!(matches!(results[2], Err(SdkError::MalformedCode(_))));
    assert_eq!(results[0].as_ref().unwrap(), results[3].as_ref().unwrap());
}

#[test]
fn test_unknown_code_is_code_not_found() {
    let (_dir, client) = corpus();
    let results = client.decode_to_path(&["BCS9999"], TierSelection::Exact(Tier::Complete));
    match &results[0] {
        Err(SdkError::CodeNotFound(addr)) => assert_eq!(*addr, CodeAddress::rule(99, 99)),
        other => panic!("Expected CodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_decode_all_tiers() {
    let (_dir, client) = corpus();
    let resolved = client.decode("BCS0102", TierSelection::All).unwrap();
    assert_eq!(resolved.paths().len(), 3);

    let err = client
        .decode("BCS0102", TierSelection::Exact(Tier::Rulet))
        .unwrap_err();
    assert!(matches!(err, SdkError::TierNotFound { tier: Tier::Rulet, .. }));
    assert!(err.is_not_found());
}

#[test]
fn test_decode_to_content() {
    let (_dir, client) = corpus();
    let contents = client.decode_to_content(&["BCS0102"], TierSelection::Exact(Tier::Summary));
    let text = contents[0].as_ref().unwrap();
    assert!(text.starts_with("## Shebang [BCS0102]\nsummary text"));

    let all = client.decode_to_content(&["BCS0102"], TierSelection::All);
    let text = all[0].as_ref().unwrap();
    assert_eq!(text.matches(CONTENT_SEPARATOR).count(), 2);
}

#[test]
fn test_exists_is_idempotent() {
    let (_dir, client) = corpus();
    for _ in 0..2 {
        assert!(client.exists("BCS0102", TierSelection::Best));
        assert!(!client.exists("BCS0103", TierSelection::Best));
        assert!(!client.exists("nonsense", TierSelection::Best));
    }
}

#[test]
fn test_best_with_custom_fallback() {
    let (_dir, client) = corpus();
    let client = client.with_resolver(Resolver::with_fallback(vec![Tier::Rulet]));
    let resolved = client.decode("BCS01", TierSelection::Best).unwrap();
    assert!(resolved.paths()[0].ends_with("00-script-structure.rulet.md"));
}

#[test]
fn test_decode_path() {
    let (dir, client) = corpus();
    let path = dir.path().join("01-script-structure/02-shebang.abstract.md");
    assert_eq!(
        client.decode_path(&path).unwrap(),
        (CodeAddress::rule(1, 2), Tier::Abstract)
    );
    assert!(matches!(
        client.decode_path(Path::new("nowhere.md")),
        Err(SdkError::PathNotIndexed(_))
    ));
}

#[test]
fn test_list_codes_ascending_and_restartable() {
    let (_dir, client) = corpus();
    let codes: Vec<String> = client.list_codes().map(|(a, _)| a.to_string()).collect();
    assert_eq!(codes, vec!["BCS01", "BCS0102", "BCS02"]);

    let again: Vec<String> = client.list_codes().map(|(a, _)| a.to_string()).collect();
    assert_eq!(codes, again);

    let (_, section) = client.list_codes().next().unwrap();
    assert!(section.has(Tier::Rulet));
    assert!(section.is_complete());
}

#[test]
fn test_sections() {
    let (_dir, client) = corpus();
    let sections = client.sections();
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Script Structure", "Variables"]);
}

#[test]
fn test_search_with_context() {
    let (_dir, client) = corpus();
    let query = SearchQuery {
        tier: Some(Tier::Complete),
        context: 1,
        ..SearchQuery::new("env bash")
    };
    let hits: Vec<_> = client.search(&query).unwrap().collect();
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.address, CodeAddress::rule(1, 2));
    assert_eq!(hit.line_number, 3);
    assert_eq!(hit.before, vec![(2, "complete text".to_string())]);
    assert_eq!(hit.after, vec![(4, "end".to_string())]);
}

#[test]
fn test_search_case_insensitive_all_tiers() {
    let (_dir, client) = corpus();
    let query = SearchQuery {
        case_insensitive: true,
        ..SearchQuery::new("ENV BASH")
    };
    // three core tiers plus the rulet line
    assert_eq!(client.search(&query).unwrap().count(), 4);
    assert!(client.search(&SearchQuery::new("[")).is_err());
}
