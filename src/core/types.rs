//! Core type definitions used throughout the codebase

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Longest territory name accepted at registration (characters)
pub const MAX_NAME_CHARS: usize = 29;

/// Longest faction color accepted at registration (characters)
pub const MAX_COLOR_CHARS: usize = 9;

/// Troop count type
pub type Troops = u32;

/// Owned text capped at `MAX` characters
///
/// Input is trimmed, then cut at the `MAX`-th character boundary.
/// Never splits a multi-byte character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BoundedText<const MAX: usize>(String);

impl<const MAX: usize> BoundedText<MAX> {
    /// Build from raw input, silently truncating
    pub fn new(raw: &str) -> Self {
        Self::truncating(raw).0
    }

    /// Build from raw input, reporting whether anything was cut off
    pub fn truncating(raw: &str) -> (Self, bool) {
        let trimmed = raw.trim();
        match trimmed.char_indices().nth(MAX) {
            Some((cut, _)) => (Self(trimmed[..cut].to_string()), true),
            None => (Self(trimmed.to_string()), false),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Maximum length in characters
    pub const fn capacity() -> usize {
        MAX
    }
}

impl<const MAX: usize> fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> From<&str> for BoundedText<MAX> {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedText<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedText<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Scenario files go through the same truncation as typed input
impl<'de, const MAX: usize> Deserialize<'de> for BoundedText<MAX> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

/// Display name of a territory
pub type TerritoryName = BoundedText<MAX_NAME_CHARS>;

/// Faction label ("color") that owns territories
pub type Faction = BoundedText<MAX_COLOR_CHARS>;
