// crates/shared-kernel/src/value_objects/look_back.rs
use std::{fmt, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of chords used as the history when predicting the next chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LookBack(NonZeroUsize);

impl LookBack {
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(1));

    pub fn new(value: usize) -> DomainResult<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidContextLength { value: value.to_string() })
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Length of a context window plus the chord that follows it.
    #[inline]
    pub const fn extended(self) -> usize {
        self.0.get() + 1
    }
}

impl Default for LookBack {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LookBack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<usize> for LookBack {
    type Error = DomainError;

    fn try_from(value: usize) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<LookBack> for usize {
    fn from(value: LookBack) -> Self {
        value.get()
    }
}

impl FromStr for LookBack {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| DomainError::InvalidContextLength { value: trimmed.to_string() })
            .and_then(Self::new)
    }
}
