// crates/domain/src/analysis.rs
use chord_kernel_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

use crate::kernel::PositionScore;

/// Frequencies below this are reported as unlikely.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// A position whose continuation the corpus rarely shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlikelyWindow {
    pub position: usize,
    /// Context and following token, joined with commas.
    pub window: String,
    pub context: String,
    pub following: String,
    pub frequency: f64,
}

impl From<&PositionScore> for UnlikelyWindow {
    fn from(score: &PositionScore) -> Self {
        Self {
            position: score.position,
            window: score.window_label(),
            context: score.context_label(),
            following: score.following.clone(),
            frequency: score.frequency,
        }
    }
}

pub fn validate_threshold(threshold: f64) -> DomainResult<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(DomainError::InvalidThreshold { value: threshold.to_string() })
    }
}

/// Positions with a frequency strictly below `threshold`, in query order.
pub fn flag_unlikely(scores: &[PositionScore], threshold: f64) -> Vec<UnlikelyWindow> {
    scores.iter().filter(|s| s.frequency < threshold).map(UnlikelyWindow::from).collect()
}
