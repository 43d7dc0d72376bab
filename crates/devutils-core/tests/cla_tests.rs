// Rust guideline compliant 2026-10-17

//! Tests for the CLA report.

use devutils_core::{cla_statuses, clas_as_json, User};

fn user(id: &str, github: Option<&str>, signed: bool) -> User {
    User {
        id: id.to_string(),
        username: format!("user{id}"),
        roles: vec!["User".to_string()],
        github: github.map(str::to_string),
        contrib_form: signed,
    }
}

fn users() -> Vec<User> {
    vec![
        user("1", Some("octocat"), true),
        user("2", Some("hubot"), false),
        user("3", Some("twin"), false),
        user("4", Some("twin"), true),
        user("5", None, true),
    ]
}

#[test]
fn test_report_is_compact_json_in_request_order() {
    let json = clas_as_json("octocat,hubot,ghost", &users()).unwrap();
    assert_eq!(json, r#"{"octocat":true,"hubot":false,"ghost":null}"#);
}

#[test]
fn test_duplicates_are_or_ed() {
    let statuses = cla_statuses(["twin"], &users());
    assert_eq!(statuses.get("twin"), Some(Some(true)));
}

#[test]
fn test_case_insensitive_match() {
    let statuses = cla_statuses(["HUBOT"], &users());
    assert_eq!(statuses.get("HUBOT"), Some(Some(false)));
}

#[test]
fn test_repeated_names_collapse() {
    let json = clas_as_json("hubot,octocat,hubot", &users()).unwrap();
    assert_eq!(json, r#"{"hubot":false,"octocat":true}"#);
}

#[test]
fn test_empty_segment_is_kept() {
    let json = clas_as_json("", &users()).unwrap();
    assert_eq!(json, r#"{"":null}"#);
}
