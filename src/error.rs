use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Lookup,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stream error: {0}")]
    Stream(#[source] io::Error),

    #[error("too {} values on line {line} (expected 3, found {found})", quantity(.found))]
    TokenCount { line: usize, found: usize },

    #[error("invalid weight {token:?} on line {line}")]
    InvalidWeight { line: usize, token: String },

    #[error("line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    #[error("total capacity does not fit the flow type")]
    CapacityOverflow,

    #[error("negative capacity on edge {from} -> {to}")]
    NegativeCapacity { from: String, to: String },

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("unknown index: {0}")]
    UnknownIndex(usize),
}

fn quantity(found: &usize) -> &'static str {
    if *found < 3 {
        "few"
    } else {
        "many"
    }
}

impl FlowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlowError::Io { .. } | FlowError::Stream(_) => ErrorKind::Io,
            FlowError::TokenCount { .. }
            | FlowError::InvalidWeight { .. }
            | FlowError::InvalidEncoding { .. }
            | FlowError::CapacityOverflow
            | FlowError::NegativeCapacity { .. } => ErrorKind::Format,
            FlowError::UnknownVertex(_) | FlowError::UnknownIndex(_) => ErrorKind::Lookup,
        }
    }
}
