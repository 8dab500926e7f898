//! Claim identifiers
//!
//! Claims are identified by human-readable sequential numbers of the form
//! `CLM-{year}-{sequence:05}`. The identifier doubles as the claim number.
//! Persisted data may carry identifiers minted elsewhere, so parsing accepts
//! any non-empty string and only the sequential helpers assume the format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Prefix shared by every generated claim identifier
pub const CLAIM_ID_PREFIX: &str = "CLM";

/// Identifier of a claim, immutable once assigned
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    /// Builds the identifier for the given year and sequence number
    pub fn sequential(year: i32, sequence: u32) -> Self {
        Self(format!("{}-{}-{:05}", CLAIM_ID_PREFIX, year, sequence))
    }

    /// Wraps an existing identifier string without checking its shape
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the trailing sequence number when the identifier is sequential
    pub fn sequence(&self) -> Option<u32> {
        let rest = self.0.strip_prefix(CLAIM_ID_PREFIX)?.strip_prefix('-')?;
        let (year, sequence) = rest.split_once('-')?;
        if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        sequence.parse().ok()
    }

    /// Returns the prefix used for generated identifiers
    pub fn prefix() -> &'static str {
        CLAIM_ID_PREFIX
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaimId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("claim identifier must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ClaimId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
