// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for ik-core scenario specs.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use ik_core::{Category, Issue, Priority};

/// Parse a `YYYY-MM-DD` date as midnight UTC.
pub fn date(s: &str) -> DateTime<Utc> {
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date");
    Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).expect("valid time"))
}

/// Noon UTC on the given day.
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid date")
}

/// Build an issue that must validate.
pub fn issue(
    description: &str,
    priority: Priority,
    category: Category,
    created_at: DateTime<Utc>,
) -> Issue {
    Issue::new(description, priority, category, Some(created_at)).expect("valid issue")
}

/// Key of a freshly built issue, as a string.
pub fn key_string(issue: &Issue) -> String {
    issue.generate_key().to_string()
}
