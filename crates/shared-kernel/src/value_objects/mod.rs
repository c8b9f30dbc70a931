// crates/shared-kernel/src/value_objects/mod.rs
pub mod look_back;
pub mod progression;
pub mod style;

pub use look_back::LookBack;
pub use progression::Progression;
pub use style::{InversionMode, StyleKey};
