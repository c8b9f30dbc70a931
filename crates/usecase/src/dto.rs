// crates/usecase/src/dto.rs
use chord_kernel_domain::PositionScore;
use chord_kernel_shared_kernel::{InversionMode, LookBack, Progression, StyleKey};
use serde::Serialize;

/// Input of a single scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
    pub progression: Progression,
    pub style: StyleKey,
    pub mode: InversionMode,
    pub look_back: LookBack,
}

impl ScoreRequest {
    pub fn new(progression: Progression, style: StyleKey) -> Self {
        Self { progression, style, mode: InversionMode::default(), look_back: LookBack::default() }
    }

    pub fn mode(mut self, mode: InversionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn look_back(mut self, look_back: LookBack) -> Self {
        self.look_back = look_back;
        self
    }
}

/// Per-position scores of a progression, in query order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub style: StyleKey,
    pub mode: InversionMode,
    pub look_back: LookBack,
    pub progression: Progression,
    pub positions: Vec<PositionScore>,
}

impl ScoreReport {
    pub fn frequencies(&self) -> Vec<f64> {
        self.positions.iter().map(|p| p.frequency).collect()
    }
}
