// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue keys.
//!
//! Format: `{category}-{year}-{priority}-{suffix}`, e.g. `HW-2002-U-1A2B3C4D`.
//!
//! - category: two-letter code (`SW`, `HW`, `NA`)
//! - year: four digits taken from the creation time
//! - priority: one-letter code (`U`, `H`, `L`)
//! - suffix: first 8 uppercase hex chars of SHA256 over the issue fields

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::{Category, Priority};

/// Length of the suffix segment.
pub const SUFFIX_LEN: usize = 8;

/// Length of every well-formed key.
pub const KEY_LEN: usize = 2 + 1 + 4 + 1 + 1 + 1 + SUFFIX_LEN;

const SEPARATOR: char = '-';

/// A parsed or generated issue key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IssueKey {
    category: Category,
    year: u16,
    priority: Priority,
    suffix: String,
}

impl IssueKey {
    /// Parses a key from its string representation.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Category encoded in the first segment.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Year encoded in the second segment.
    ///
    /// Years outside 0..=9999 are stored reduced modulo 10000, so this can
    /// differ from the year of the issue's creation time.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Priority encoded in the third segment.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The alphanumeric suffix segment.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The first three segments joined, e.g. `HW-2002-U`.
    pub fn prefix(&self) -> String {
        format!(
            "{}{SEPARATOR}{:04}{SEPARATOR}{}",
            self.category.code(),
            self.year,
            self.priority.code()
        )
    }

    /// All four segments in key order.
    pub fn segments(&self) -> [String; 4] {
        [
            self.category.code().to_string(),
            format!("{:04}", self.year),
            self.priority.code().to_string(),
            self.suffix.clone(),
        ]
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.prefix(), self.suffix)
    }
}

impl FromStr for IssueKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        if parts.len() != 4 {
            return Err(Error::InvalidKey(format!(
                "expected format 'CAT-YYYY-P-SUFFIX', got '{s}'"
            )));
        }

        let category = Category::from_code(parts[0]).ok_or_else(|| {
            Error::InvalidKey(format!("unknown category code '{}' in '{s}'", parts[0]))
        })?;

        let year = parse_year(parts[1])
            .ok_or_else(|| Error::InvalidKey(format!("invalid year '{}' in '{s}'", parts[1])))?;

        let priority = Priority::from_code(parts[2]).ok_or_else(|| {
            Error::InvalidKey(format!("unknown priority code '{}' in '{s}'", parts[2]))
        })?;

        let suffix = parts[3];
        if !is_valid_suffix(suffix) {
            return Err(Error::InvalidKey(format!(
                "suffix must be {SUFFIX_LEN} letters or digits, got '{suffix}' in '{s}'"
            )));
        }

        Ok(IssueKey {
            category,
            year,
            priority,
            suffix: suffix.to_string(),
        })
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for IssueKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Generate the key for an issue's fields.
///
/// Pure: equal inputs always produce equal keys.
pub fn generate_key(
    description: &str,
    priority: Priority,
    category: Category,
    created_at: &DateTime<Utc>,
) -> IssueKey {
    let key = IssueKey {
        category,
        year: year_segment(created_at),
        priority,
        suffix: derive_suffix(description, priority, category, created_at),
    };
    tracing::trace!(%key, "generated issue key");
    key
}

/// Derive the suffix segment from the issue fields.
/// Hash input is the description, category code, priority code and RFC 3339 timestamp, newline separated.
pub fn derive_suffix(
    description: &str,
    priority: Priority,
    category: Category,
    created_at: &DateTime<Utc>,
) -> String {
    let input = format!(
        "{}\n{}\n{}\n{}",
        description,
        category.code(),
        priority.code(),
        created_at.to_rfc3339()
    );
    let hash = Sha256::digest(input.as_bytes());
    hex::encode_upper(&hash[..SUFFIX_LEN / 2])
}

// Years outside 0..=9999 wrap so the segment keeps four digits.
fn year_segment(created_at: &DateTime<Utc>) -> u16 {
    u16::try_from(created_at.year().rem_euclid(10_000)).unwrap_or(0)
}

fn parse_year(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn is_valid_suffix(s: &str) -> bool {
    s.len() == SUFFIX_LEN && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
