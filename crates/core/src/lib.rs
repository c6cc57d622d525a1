// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ik-core: Issue entity and key generation
//!
//! This crate provides the validated Issue type and the deterministic
//! `CAT-YYYY-P-SUFFIX` keys derived from its fields.

pub mod clock;
pub mod error;
pub mod issue;
pub mod key;
pub mod validate;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use issue::{Category, Issue, NewIssue, Priority};
pub use key::{generate_key, IssueKey, KEY_LEN, SUFFIX_LEN};
