// crates/ports/src/observer.rs
use chord_kernel_domain::PositionScore;
use chord_kernel_shared_kernel::{Progression, Result, StyleKey};

/// Receives scoring progress when verbose reporting is requested.
pub trait ScoreObserver: Send + Sync {
    fn on_start(&self, progression: &Progression) -> Result<()>;
    fn on_position(&self, style: &StyleKey, score: &PositionScore) -> Result<()>;
}
