// crates/infra/src/corpus/in_memory.rs
use std::collections::HashMap;

use chord_kernel_ports::corpus::CorpusProvider;
use chord_kernel_shared_kernel::{InfrastructureError, InversionMode, Result, StyleKey};

/// Corpus provider over texts held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    texts: HashMap<(StyleKey, InversionMode), String>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, style: StyleKey, mode: InversionMode, text: impl Into<String>) -> Self {
        self.insert(style, mode, text);
        self
    }

    pub fn insert(&mut self, style: StyleKey, mode: InversionMode, text: impl Into<String>) {
        self.texts.insert((style, mode), text.into());
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn fetch(&self, style: &StyleKey, mode: InversionMode) -> Result<String> {
        self.texts
            .get(&(style.clone(), mode))
            .cloned()
            .ok_or_else(|| InfrastructureError::StyleNotSupported { style: style.to_string() }.into())
    }
}
