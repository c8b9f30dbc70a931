// crates/infra/src/corpus/file_store.rs
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chord_kernel_ports::corpus::CorpusProvider;
use chord_kernel_shared_kernel::{InfrastructureError, InversionMode, Result, StyleKey};
use tracing::debug;

use crate::persistence::FileReader;

pub const DEFAULT_DATASETS_DIR: &str = "datasets";

const DATASET_MARKER: &str = "-dataset-";
const DATASET_EXTENSION: &str = ".txt";

/// Corpus files laid out as `<root>/<simple|inv>-dataset-<style>.txt`.
#[derive(Debug, Clone)]
pub struct FileCorpusStore {
    root: PathBuf,
}

impl FileCorpusStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, style: &StyleKey, mode: InversionMode) -> PathBuf {
        self.root
            .join(format!("{}{DATASET_MARKER}{style}{DATASET_EXTENSION}", mode_prefix(mode)))
    }

    /// Styles that have a corpus file for `mode`, sorted.
    pub fn available_styles(&self, mode: InversionMode) -> Result<Vec<StyleKey>> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| InfrastructureError::CorpusListing {
            path: self.root.clone(),
            source,
        })?;

        let prefix = format!("{}{DATASET_MARKER}", mode_prefix(mode));
        let mut styles: Vec<StyleKey> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let style = name.strip_prefix(&prefix)?.strip_suffix(DATASET_EXTENSION)?;
                StyleKey::new(style).ok()
            })
            .collect();
        styles.sort();
        styles.dedup();
        Ok(styles)
    }
}

impl Default for FileCorpusStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATASETS_DIR)
    }
}

impl CorpusProvider for FileCorpusStore {
    fn fetch(&self, style: &StyleKey, mode: InversionMode) -> Result<String> {
        let path = self.path_for(style, mode);
        debug!(path = %path.display(), "reading corpus");
        match FileReader::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(InfrastructureError::StyleNotSupported { style: style.to_string() }.into())
            }
            Err(source) => Err(InfrastructureError::CorpusRead { path, source }.into()),
        }
    }
}

const fn mode_prefix(mode: InversionMode) -> &'static str {
    match mode {
        InversionMode::Simple => "simple",
        InversionMode::WithInversions => "inv",
    }
}
