// crates/ports/src/corpus.rs
use chord_kernel_shared_kernel::{InversionMode, Result, StyleKey};

/// Port for fetching the raw text of a style's corpus.
///
/// Implementations fail with `InfrastructureError::StyleNotSupported` when
/// they hold no corpus for `style` in the requested `mode`.
pub trait CorpusProvider: Send + Sync {
    fn fetch(&self, style: &StyleKey, mode: InversionMode) -> Result<String>;
}

impl<T: CorpusProvider + ?Sized> CorpusProvider for &T {
    fn fetch(&self, style: &StyleKey, mode: InversionMode) -> Result<String> {
        (**self).fetch(style, mode)
    }
}
