// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod corpus;
pub mod persistence;

pub use corpus::{FileCorpusStore, InMemoryCorpus};
