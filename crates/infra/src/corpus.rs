// crates/infra/src/corpus.rs
pub mod file_store;
pub mod in_memory;

pub use file_store::FileCorpusStore;
pub use in_memory::InMemoryCorpus;
