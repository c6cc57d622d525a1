// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for issue construction.
//!
//! Tests verifying description validation and creation time defaulting.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "prelude.rs"]
mod prelude;

use chrono::{DateTime, Duration, Utc};
use ik_core::{Category, Error, FixedClock, Issue, NewIssue, Priority};
use prelude::*;
use similar_asserts::assert_eq;
use yare::parameterized;

// =============================================================================
// Description Validation
// =============================================================================

#[test]
fn null_description_is_rejected() {
    let draft = NewIssue {
        description: None,
        priority: Priority::Urgent,
        category: Category::Software,
        created_at: Some(Utc::now()),
    };
    let err = Issue::try_from(draft).unwrap_err();
    assert!(matches!(err, Error::InvalidDescription));
}

#[parameterized(
    single_space = { " " },
    empty = { "" },
    whitespace_mix = { " \t\r\n " },
)]
fn whitespace_description_is_rejected(description: &str) {
    let err = Issue::new(description, Priority::Urgent, Category::Software, Some(Utc::now()))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDescription));
}

#[parameterized(
    low = { Priority::Low },
    high = { Priority::High },
    urgent = { Priority::Urgent },
)]
fn any_priority_constructs(priority: Priority) {
    for category in [Category::Software, Category::Hardware, Category::Unknown] {
        let issue = Issue::new("Valid", priority, category, None).unwrap();
        assert_ne!(issue.created_at(), DateTime::<Utc>::default());
    }
}

// =============================================================================
// Creation Time
// =============================================================================

#[test]
fn omitted_created_at_resolves_to_now() {
    let before = Utc::now();
    let issue = Issue::new("DateTime is null", Priority::Urgent, Category::Software, None).unwrap();
    let after = Utc::now();

    assert_ne!(issue.created_at(), DateTime::<Utc>::default());
    assert!(issue.created_at() >= before);
    assert!(issue.created_at() <= after);
}

#[test]
fn default_created_at_resolves_to_now() {
    let issue = Issue::new(
        "Zero timestamp",
        Priority::High,
        Category::Hardware,
        Some(DateTime::<Utc>::default()),
    )
    .unwrap();
    assert!(Utc::now() - issue.created_at() < Duration::minutes(1));
}

#[test]
fn injected_clock_controls_default() {
    let now = noon(2026, 10, 16);
    let issue = NewIssue::new("Clocked", Priority::Low, Category::Software)
        .build_with_clock(&FixedClock(now))
        .unwrap();
    assert_eq!(issue.created_at(), now);
    assert!(key_string(&issue).starts_with("SW-2026-L-"));
}

#[test]
fn explicit_created_at_is_kept() {
    let created_at = noon(2002, 10, 30);
    let built = issue("Kept", Priority::High, Category::Software, created_at);
    assert_eq!(built.created_at(), created_at);
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn json_round_trip_keeps_key() {
    let original = issue("HardWare Issue", Priority::Urgent, Category::Hardware, noon(2002, 10, 30));
    let json = original.to_json().unwrap();
    let parsed = Issue::from_json(&json).unwrap();
    assert_eq!(key_string(&parsed), original.key().to_string());
    assert_eq!(parsed.to_json().unwrap(), json);
}

#[test]
fn json_null_description_is_rejected() {
    let json = r#"{"description": null, "priority": "urgent", "category": "software"}"#;
    let err = Issue::from_json(json).unwrap_err();
    assert!(matches!(err, Error::InvalidDescription));
}
