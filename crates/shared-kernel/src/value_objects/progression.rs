// crates/shared-kernel/src/value_objects/progression.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between chord tokens, both in queries and in corpus pieces.
pub const TOKEN_DELIMITER: char = ',';

/// A user-supplied chord progression, tokenized the same way as a corpus piece.
///
/// All whitespace is removed from the raw text before it is split on commas,
/// so `"I, IV ,V"` and `"I,IV,V"` are the same progression. No other
/// validation happens here: an empty query is a progression of one empty token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progression(Vec<String>);

impl Progression {
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        Self(normalized.split(TOKEN_DELIMITER).map(str::to_string).collect())
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Borrowed view used for table lookups.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.0 {
            if !first {
                write!(f, "{TOKEN_DELIMITER}")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}
