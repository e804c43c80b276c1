//! Integration tests for rusty-form-errors
//!
//! Covers adding, bulk replacement, clearing and the summary views.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use rusty_form_errors::ErrorCollection;

#[fixture]
fn loaded() -> ErrorCollection {
    let mut errors = ErrorCollection::new();
    errors.replace_all([
        ("username", vec!["Invalid username"]),
        ("email", vec!["Invalid email"]),
    ]);
    errors
}

#[test]
fn test_add() {
    let mut errors = ErrorCollection::new();
    errors.add("username", "Invalid username.");

    assert!(errors.has(Some("username")));
    assert_eq!(errors.get_first("username"), "Invalid username.");
}

#[test]
fn test_replace_all_after_clear() {
    let mut errors = ErrorCollection::new();
    errors.clear(None);
    assert_eq!(errors.get_first("username"), "");

    errors.replace_all([("username", vec!["Invalid username"])]);

    assert!(errors.has(Some("username")));
    assert_eq!(errors.get_first("username"), "Invalid username");
}

#[test]
fn test_clear() {
    let mut errors = ErrorCollection::new();
    errors.add("username", "Username is required");
    errors.add("email", "Email is required");

    let all: Vec<(&str, &[String])> = errors.iter().collect();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].0, "username");
    assert_eq!(all[1].1, ["Email is required"]);

    errors.clear(None);

    assert!(errors.get_all().is_empty());
    assert!(!errors.has(None));
}

#[test]
fn test_clear_with_attribute() {
    let mut errors = ErrorCollection::new();
    errors.add("username", "Username is required");
    errors.add("email", "Email is required");

    errors.clear(Some("username"));

    assert_eq!(errors.get_all().len(), 1);
    assert_eq!(errors.get("email"), ["Email is required"]);
    assert!(errors.get("username").is_empty());
}

#[test]
fn test_get_all_empty() {
    let errors = ErrorCollection::new();
    assert!(errors.get_all().is_empty());
}

#[test]
fn test_get() {
    let mut errors = ErrorCollection::new();
    errors.add("username", "Invalid username");

    assert_eq!(errors.get("username"), ["Invalid username"]);
}

#[rstest]
fn test_get_firsts(loaded: ErrorCollection) {
    let firsts = loaded.get_firsts();
    let pairs: Vec<(&str, &str)> = firsts
        .iter()
        .map(|(attribute, message)| (attribute.as_str(), message.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![("username", "Invalid username"), ("email", "Invalid email")]
    );
}

#[test]
fn test_get_firsts_empty() {
    assert!(ErrorCollection::new().get_firsts().is_empty());
}

#[rstest]
fn test_get_summary(loaded: ErrorCollection) {
    assert_eq!(loaded.get_summary(&[]), vec!["Invalid username", "Invalid email"]);
}

#[test]
fn test_get_summary_empty() {
    assert!(ErrorCollection::new().get_summary(&[]).is_empty());
}

#[rstest]
#[case(&["username"], vec!["Invalid username"])]
#[case(&["email"], vec!["Invalid email"])]
#[case(&["username", "missing"], vec!["Invalid username"])]
#[case(&["missing"], vec![])]
fn test_get_summary_with_only_attributes(
    loaded: ErrorCollection,
    #[case] only: &[&str],
    #[case] expected: Vec<&str>,
) {
    assert_eq!(loaded.get_summary(only), expected);
}

#[test]
fn test_get_summary_first() {
    let mut errors = ErrorCollection::new();
    errors.replace_all([
        ("username", vec!["The field is required", "Invalid username"]),
        ("email", vec!["Invalid email"]),
    ]);

    assert_eq!(
        errors.get_summary_first(),
        vec!["The field is required", "Invalid email"]
    );
}

#[test]
fn test_has_error() {
    assert!(!ErrorCollection::new().has(None));
}

#[rstest]
fn test_summary_of_single_attribute_matches_get(loaded: ErrorCollection) {
    assert_eq!(loaded.get_summary(&["email"]), loaded.get("email"));
}
