// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input validation for issue fields.

use crate::error::{Error, Result};

/// Trim whitespace from a simple text field.
pub fn trim_field(text: &str) -> String {
    text.trim().to_string()
}

/// Validate a description and return its trimmed form.
///
/// A missing description, an empty one, and one made only of whitespace are
/// all rejected with [`Error::InvalidDescription`].
pub fn validate_description(description: Option<&str>) -> Result<String> {
    let trimmed = description.map(trim_field).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(Error::InvalidDescription);
    }
    Ok(trimmed)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
