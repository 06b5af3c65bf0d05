use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the chainboard workspace.
///
/// Covers source-tagged transport failures, response decode failures,
/// missing render targets, and argument validation errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainboardError {
    /// A chain source failed to produce an envelope (network error,
    /// non-success HTTP status, forced mock failure, ...).
    #[error("{name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The response body could not be decoded as a chain envelope.
    ///
    /// This includes a missing or mistyped `data` field.
    #[error("decode error: {0}")]
    Decode(String),

    /// The designated container does not exist on the supplied page.
    #[error("container not found: {id}")]
    ContainerNotFound {
        /// Identifier of the missing container.
        id: String,
    },

    /// Invalid input argument (bad base URL, builder misuse, etc.).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl ChainboardError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Decode` error from a message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Helper: build a `ContainerNotFound` error for a container id.
    pub fn container_not_found(id: impl Into<String>) -> Self {
        Self::ContainerNotFound { id: id.into() }
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
