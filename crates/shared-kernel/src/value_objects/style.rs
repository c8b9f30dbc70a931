// crates/shared-kernel/src/value_objects/style.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a reference corpus, such as a composer's last name.
///
/// Keys are trimmed and lower-cased. They end up in file names, so path
/// separators are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StyleKey(String);

impl StyleKey {
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let key = raw.as_ref().trim().to_lowercase();
        if key.is_empty() {
            return Err(DomainError::InvalidStyleKey { key, reason: "must not be empty".into() });
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(DomainError::InvalidStyleKey { key, reason: "must not contain a path".into() });
        }
        Ok(Self(key))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StyleKey {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for StyleKey {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<StyleKey> for String {
    fn from(value: StyleKey) -> Self {
        value.0
    }
}

/// Which of the two parallel corpora of a style to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InversionMode {
    /// Plain Roman numerals, e.g. `V`.
    #[default]
    Simple,
    /// Roman numerals with a parenthesized inversion index, e.g. `V(1)`.
    WithInversions,
}

impl InversionMode {
    #[inline]
    pub const fn from_flag(with_inversions: bool) -> Self {
        if with_inversions { Self::WithInversions } else { Self::Simple }
    }

    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::WithInversions)
    }
}

impl From<bool> for InversionMode {
    fn from(value: bool) -> Self {
        Self::from_flag(value)
    }
}
