// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ChordKernelError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ChordKernelError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl ChordKernelError {
    /// Strips any `Context` layers and returns the innermost error.
    pub fn root(&self) -> &ChordKernelError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the corpus provider had no corpus for the requested style.
    pub fn is_style_not_supported(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::StyleNotSupported { .. }))
    }
}

pub type Result<T> = std::result::Result<T, ChordKernelError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid context length: {value} (must be at least 1)")]
    InvalidContextLength { value: String },

    #[error("Invalid style key '{key}': {reason}")]
    InvalidStyleKey { key: String, reason: String },

    #[error("Invalid threshold: {value} (must be within 0.0..=1.0)")]
    InvalidThreshold { value: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Unknown style '{style}' (known: {})", known.join(", "))]
    UnknownStyle { style: String, known: Vec<String> },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("The style '{style}' is not supported: no corpus in the database")]
    StyleNotSupported { style: String },

    #[error("Failed to read corpus '{path}': {source}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list corpus directory '{path}': {source}")]
    CorpusListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to read answer for '{prompt}': {source}")]
    Prompt {
        prompt: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input ended before '{prompt}' was answered")]
    InputClosed { prompt: String },

    #[error("Invalid value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ChordKernelError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChordKernelError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ChordKernelError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ChordKernelError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ChordKernelError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
