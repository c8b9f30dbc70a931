//! # Domain
//!
//! Corpus statistics for chord progressions:
//!
//! - [`sequence`]: fixed-length window counting over a corpus
//! - [`kernel`]: conditional frequency of each query window
//! - [`analysis`]: flagging of unlikely positions
//!
//! Everything here is pure: no I/O, no retained state.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod kernel;
pub mod sequence;

pub use analysis::{DEFAULT_THRESHOLD, UnlikelyWindow, flag_unlikely, validate_threshold};
pub use kernel::{PositionScore, conditional_frequency, score_windows};
pub use sequence::{SequenceTable, count_windows, pieces};
