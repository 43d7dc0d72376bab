// Rust guideline compliant 2026-10-17

//! Property-based tests for the history scanner.
//!
//! The scanner is compared against a reference that searches the history
//! backwards for the first link or unlink event.

use devutils_core::{
    resolve_last_link_action, ActionKind, ChangeEvent, LinkAction, LinkDetail, LinkResolution,
};
use proptest::prelude::*;

/// Generates action kinds, weighted towards link and unlink.
fn arb_action() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        3 => Just(ActionKind::Link),
        3 => Just(ActionKind::Unlink),
        1 => Just(ActionKind::Create),
        2 => Just(ActionKind::Set),
        1 => Just(ActionKind::Retire),
        1 => Just(ActionKind::Restore),
        1 => prop::string::string_regex("[a-z]{3,8}")
            .unwrap()
            .prop_map(ActionKind::from),
    ]
}

/// Generates events; link and unlink events always carry a detail.
fn arb_event() -> impl Strategy<Value = ChangeEvent> {
    (
        1u32..100_000u32,
        0i64..2_000_000_000i64,
        prop::string::string_regex("[0-9]{1,4}").unwrap(),
        arb_action(),
        prop::string::string_regex("[0-9]{1,4}").unwrap(),
    )
        .prop_map(|(event_id, timestamp, actor, action, related)| {
            let needs_detail = matches!(action, ActionKind::Link | ActionKind::Unlink);
            let event = ChangeEvent::new(event_id.to_string(), timestamp, actor, action);
            if needs_detail {
                event.with_detail(LinkDetail::new("issue", related, "messages"))
            } else {
                event
            }
        })
}

fn arb_history() -> impl Strategy<Value = Vec<ChangeEvent>> {
    prop::collection::vec(arb_event(), 0..40)
}

fn reference(history: &[ChangeEvent]) -> LinkResolution {
    for event in history.iter().rev() {
        match event.action {
            ActionKind::Link => {
                return LinkResolution {
                    related_id: event.detail.as_ref().map(|d| d.node_id.clone()),
                    action: Some(LinkAction::Link),
                }
            }
            ActionKind::Unlink => {
                return LinkResolution {
                    related_id: None,
                    action: Some(LinkAction::Unlink),
                }
            }
            _ => {}
        }
    }
    LinkResolution::none()
}

proptest! {
    #[test]
    fn prop_matches_backwards_search(history in arb_history()) {
        let resolution = resolve_last_link_action(&history).unwrap();
        prop_assert_eq!(resolution, reference(&history));
    }

    #[test]
    fn prop_no_link_events_means_none(history in arb_history()) {
        let filtered: Vec<ChangeEvent> = history
            .into_iter()
            .filter(|e| !matches!(e.action, ActionKind::Link | ActionKind::Unlink))
            .collect();
        prop_assert!(resolve_last_link_action(&filtered).unwrap().is_none());
    }

    #[test]
    fn prop_trailing_unlink_hides_related_id(
        history in arb_history(),
        tail in prop::collection::vec(arb_event(), 0..5),
    ) {
        let mut history = history;
        history.push(
            ChangeEvent::new("u", 0, "1", ActionKind::Unlink)
                .with_detail(LinkDetail::new("issue", "1", "messages")),
        );
        history.extend(
            tail.into_iter()
                .filter(|e| !matches!(e.action, ActionKind::Link | ActionKind::Unlink)),
        );

        let resolution = resolve_last_link_action(&history).unwrap();
        prop_assert_eq!(resolution.related_id, None);
        prop_assert_eq!(resolution.action, Some(LinkAction::Unlink));
    }

    #[test]
    fn prop_trailing_link_reports_its_target(
        history in arb_history(),
        target in prop::string::string_regex("[0-9]{1,4}").unwrap(),
    ) {
        let mut history = history;
        history.push(
            ChangeEvent::new("l", 0, "1", ActionKind::Link)
                .with_detail(LinkDetail::new("issue", target.clone(), "files")),
        );

        let resolution = resolve_last_link_action(&history).unwrap();
        prop_assert_eq!(resolution.related_id, Some(target));
        prop_assert_eq!(resolution.action, Some(LinkAction::Link));
    }

    #[test]
    fn prop_resolution_is_idempotent(history in arb_history()) {
        let first = resolve_last_link_action(&history).unwrap();
        let second = resolve_last_link_action(&history).unwrap();
        prop_assert_eq!(first, second);
    }
}
