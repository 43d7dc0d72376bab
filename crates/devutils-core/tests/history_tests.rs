// Rust guideline compliant 2026-10-17

//! Scenario tests for the link/unlink history scanner.

use devutils_core::{
    resolve_for, resolve_last_link_action, ActionKind, ChangeEvent, HistoryRecord, LinkAction,
    LinkDetail, LinkResolution,
};

fn event(id: &str, action: ActionKind) -> ChangeEvent {
    ChangeEvent::new(id, 1_311_311_652, "4", action)
}

fn messages_of(issue: &str) -> LinkDetail {
    LinkDetail::new("issue", issue, "messages")
}

#[test]
fn test_create_then_link_reports_issue() {
    let history = vec![
        event("1", ActionKind::Create),
        event("2", ActionKind::Link).with_detail(messages_of("7")),
    ];

    let resolution = resolve_last_link_action(&history).expect("resolve");
    assert_eq!(resolution.related_id.as_deref(), Some("7"));
    assert_eq!(resolution.action, Some(LinkAction::Link));
}

#[test]
fn test_link_then_unlink_reports_unlink_without_issue() {
    let history = vec![
        event("1", ActionKind::Link).with_detail(messages_of("7")),
        event("2", ActionKind::Unlink).with_detail(messages_of("7")),
    ];

    let resolution = resolve_last_link_action(&history).expect("resolve");
    assert_eq!(resolution.related_id, None);
    assert_eq!(resolution.action, Some(LinkAction::Unlink));
}

#[test]
fn test_unlink_then_link_elsewhere_reports_new_issue() {
    let history = vec![
        event("1", ActionKind::Unlink).with_detail(messages_of("7")),
        event("2", ActionKind::Link).with_detail(messages_of("9")),
    ];

    let resolution = resolve_last_link_action(&history).expect("resolve");
    assert_eq!(resolution.related_id.as_deref(), Some("9"));
    assert_eq!(resolution.action, Some(LinkAction::Link));
}

#[test]
fn test_empty_history_reports_nothing() {
    let resolution = resolve_last_link_action(&[]).expect("resolve");
    assert_eq!(resolution, LinkResolution::none());
    assert!(resolution.is_none());
}

#[test]
fn test_unrelated_actions_report_nothing() {
    let history = vec![
        event("1", ActionKind::Create),
        event("2", ActionKind::Set),
        event("3", ActionKind::Retire),
        event("4", ActionKind::Restore),
    ];

    assert_eq!(
        resolve_last_link_action(&history).expect("resolve"),
        LinkResolution::none()
    );
}

#[test]
fn test_many_links_before_final_unlink() {
    let mut history: Vec<ChangeEvent> = (1..=5)
        .map(|i| event(&i.to_string(), ActionKind::Link).with_detail(messages_of(&i.to_string())))
        .collect();
    history.push(event("6", ActionKind::Unlink).with_detail(messages_of("5")));
    history.push(event("7", ActionKind::Set));

    let resolution = resolve_last_link_action(&history).expect("resolve");
    assert_eq!(resolution.related_id, None);
    assert_eq!(resolution.action, Some(LinkAction::Unlink));
}

#[test]
fn test_history_is_not_resorted_by_timestamp() {
    let mut link = event("9", ActionKind::Link).with_detail(messages_of("3"));
    link.timestamp = 2_000_000_000;
    let mut unlink = event("10", ActionKind::Unlink).with_detail(messages_of("3"));
    unlink.timestamp = 1_000_000_000;

    let resolution = resolve_last_link_action(&[link, unlink]).expect("resolve");
    assert_eq!(resolution.action, Some(LinkAction::Unlink));
}

#[test]
fn test_resolve_for_uses_only_the_entity_history() {
    let records = vec![
        HistoryRecord {
            class: "msg".to_string(),
            node_id: "16".to_string(),
            event: event("1", ActionKind::Link).with_detail(messages_of("1")),
        },
        HistoryRecord {
            class: "msg".to_string(),
            node_id: "17".to_string(),
            event: event("2", ActionKind::Unlink).with_detail(messages_of("1")),
        },
        HistoryRecord {
            class: "file".to_string(),
            node_id: "16".to_string(),
            event: event("3", ActionKind::Unlink).with_detail(LinkDetail::new("issue", "1", "files")),
        },
    ];

    let resolution = resolve_for(&records, "msg", "16").expect("resolve");
    assert_eq!(resolution.related_id.as_deref(), Some("1"));
    assert_eq!(resolution.action, Some(LinkAction::Link));

    let resolution = resolve_for(&records, "msg", "99").expect("resolve");
    assert!(resolution.is_none());
}

#[test]
fn test_resolution_serializes_for_templates() {
    let resolution = LinkResolution {
        related_id: Some("7".to_string()),
        action: Some(LinkAction::Link),
    };
    let json = serde_json::to_string(&resolution).expect("serialize");
    assert_eq!(json, r#"{"related_id":"7","action":"link"}"#);
}
