// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ik-core operations.

use thiserror::Error;

/// All possible errors that can occur in ik-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue description: description is missing or blank\n  hint: provide a description with at least one non-whitespace character")]
    InvalidDescription,

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, high, urgent")]
    InvalidPriority(String),

    #[error("invalid issue key: {0}\n  hint: keys look like HW-2002-U-1A2B3C4D")]
    InvalidKey(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ik-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
