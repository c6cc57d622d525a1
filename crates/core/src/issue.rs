// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types.
//!
//! This module contains the Issue entity, its construction draft NewIssue,
//! and the Priority and Category enumerations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::clock::{ClockSource, SystemClock};
use crate::error::{Error, Result};
use crate::key::{self, IssueKey};
use crate::validate::validate_description;

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Should be handled soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl Priority {
    /// Returns the string representation used in serialization and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Returns the one-letter code used in issue keys.
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Urgent => "U",
            Priority::High => "H",
            Priority::Low => "L",
        }
    }

    /// Maps a key code back to its priority.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Priority::Urgent),
            "H" => Some(Priority::High),
            "L" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Priority {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "high" | "h" => Ok(Priority::High),
            "urgent" | "u" => Ok(Priority::Urgent),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Area of the system an issue concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Category {
    /// Software defect or request.
    Software,
    /// Hardware fault.
    Hardware,
    /// Not classified. Unrecognized categories land here.
    Unknown,
}

impl Category {
    /// Returns the string representation used in serialization and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Software => "software",
            Category::Hardware => "hardware",
            Category::Unknown => "unknown",
        }
    }

    /// Returns the two-letter code used in issue keys.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Software => "SW",
            Category::Hardware => "HW",
            Category::Unknown => "NA",
        }
    }

    /// Maps a key code back to its category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SW" => Some(Category::Software),
            "HW" => Some(Category::Hardware),
            "NA" => Some(Category::Unknown),
            _ => None,
        }
    }

    /// Parses a category name, falling back to [`Category::Unknown`].
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "software" | "sw" => Category::Software,
            "hardware" | "hw" => Category::Hardware,
            "unknown" | "un_known" | "na" => Category::Unknown,
            other => {
                tracing::debug!(category = other, "unrecognized category, using unknown");
                Category::Unknown
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Category::parse_lenient(s))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse_lenient(&s)
    }
}

/// Unvalidated input for creating an issue.
///
/// This is also the deserialization shape of [`Issue`], so a `null` or
/// missing description in JSON is rejected the same way a blank one is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    /// Free-text description. Required, but optional here so that absence
    /// can be reported as a validation error.
    #[serde(default)]
    pub description: Option<String>,
    /// Issue priority.
    pub priority: Priority,
    /// Issue category.
    pub category: Category,
    /// Creation time. Omitted or default values are replaced by the current time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewIssue {
    /// Creates a draft with the given description and no creation time.
    pub fn new(description: impl Into<String>, priority: Priority, category: Category) -> Self {
        NewIssue {
            description: Some(description.into()),
            priority,
            category,
            created_at: None,
        }
    }

    /// Sets the creation time for this draft (builder pattern).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validates the draft, defaulting the creation time from the system clock.
    pub fn build(self) -> Result<Issue> {
        self.build_with_clock(&SystemClock)
    }

    /// Validates the draft, defaulting the creation time from `clock`.
    pub fn build_with_clock<C: ClockSource>(self, clock: &C) -> Result<Issue> {
        Issue::build(
            self.description.as_deref(),
            self.priority,
            self.category,
            self.created_at,
            clock,
        )
    }
}

/// A validated issue with its derived key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewIssue")]
pub struct Issue {
    description: String,
    priority: Priority,
    category: Category,
    created_at: DateTime<Utc>,
    key: IssueKey,
}

impl Issue {
    /// Creates an issue, defaulting the creation time from the system clock.
    ///
    /// Fails with [`Error::InvalidDescription`] when `description` is blank.
    pub fn new(
        description: &str,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        Self::build(Some(description), priority, category, created_at, &SystemClock)
    }

    /// Creates an issue, defaulting the creation time from `clock`.
    pub fn with_clock<C: ClockSource>(
        description: &str,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
        clock: &C,
    ) -> Result<Self> {
        Self::build(Some(description), priority, category, created_at, clock)
    }

    fn build<C: ClockSource>(
        description: Option<&str>,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
        clock: &C,
    ) -> Result<Self> {
        let description = validate_description(description)?;
        let created_at = resolve_created_at(created_at, clock);
        let key = key::generate_key(&description, priority, category, &created_at);
        Ok(Issue {
            description,
            priority,
            category,
            created_at,
            key,
        })
    }

    /// Parses an issue from JSON, validating it like any other construction.
    pub fn from_json(json: &str) -> Result<Self> {
        let draft: NewIssue = serde_json::from_str(json)?;
        draft.try_into()
    }

    /// Serializes the issue, including its key, to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Recomputes the key from the issue's fields.
    ///
    /// Always equal to [`Issue::key`].
    pub fn generate_key(&self) -> IssueKey {
        key::generate_key(
            &self.description,
            self.priority,
            self.category,
            &self.created_at,
        )
    }

    /// The key computed at construction.
    pub fn key(&self) -> &IssueKey {
        &self.key
    }

    /// The trimmed, non-blank description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How urgently the issue needs attention.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Area of the system the issue concerns.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The resolved creation time. Never the default timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl TryFrom<NewIssue> for Issue {
    type Error = Error;

    fn try_from(draft: NewIssue) -> Result<Self> {
        draft.build()
    }
}

fn resolve_created_at<C: ClockSource>(
    created_at: Option<DateTime<Utc>>,
    clock: &C,
) -> DateTime<Utc> {
    match created_at {
        Some(ts) if ts != DateTime::<Utc>::default() => ts,
        _ => {
            let mut now = clock.now();
            if now == DateTime::<Utc>::default() {
                tracing::debug!("clock reported the default timestamp, using system clock");
                now = SystemClock.now();
            }
            tracing::debug!(%now, "created_at omitted, defaulting to current time");
            now
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
