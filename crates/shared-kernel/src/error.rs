// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WordTallyError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WordTallyError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, WordTallyError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The frequency table could not grow to hold a new word.
    #[error("Out of memory: could not store a {bytes}-byte word")]
    OutOfMemory {
        bytes: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("{}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rewind input: {source}")]
    Seek {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("getrlimit({resource}): {details}")]
    Limits { resource: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { source: err }
    }
}

impl From<std::io::Error> for WordTallyError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WordTallyError {
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
    E: Into<WordTallyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WordTallyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WordTallyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
