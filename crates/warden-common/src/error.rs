//! Unified error type for the warden workspace.
//!
//! Every backend call and every command handler returns [`Result`]; a
//! failure carries one of the kinds below and maps 1:1 onto a stable
//! process exit code via [`WardenError::exit_code`]. Handlers propagate
//! backend failures verbatim; they never wrap or remap a kind.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
///
/// The exit-code mapping is part of the CLI contract and must stay stable:
///
/// | kind | exit code |
/// |---|---|
/// | `Cancelled` | 1 |
/// | `Unknown` | 2 |
/// | `InvalidArgument` | 3 |
/// | `NotFound` | 5 |
/// | `AlreadyExists` | 6 |
/// | `PermissionDenied` | 7 |
/// | `FailedPrecondition` | 9 |
/// | `Io` | 10 |
/// | `Unimplemented` | 12 |
/// | `Serialization` | 13 |
/// | `Unavailable` | 14 |
/// | `Usage` | 64 |
#[derive(Debug, Error)]
pub enum WardenError {
    /// The operation was cancelled by the backend.
    #[error("operation cancelled: {message}")]
    Cancelled {
        /// Description of the cancelled operation.
        message: String,
    },

    /// A failure with no more specific kind.
    #[error("{message}")]
    Unknown {
        /// Description of the failure.
        message: String,
    },

    /// A flag or positional argument is malformed or missing.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// A resource that must not exist already does.
    #[error("{kind} already exists: {id}")]
    AlreadyExists {
        /// Type of the conflicting resource.
        kind: &'static str,
        /// Identifier of the conflicting resource.
        id: String,
    },

    /// A permission or capability error.
    #[error("permission denied: {message}")]
    PermissionDenied {
        /// Description of the denied operation.
        message: String,
    },

    /// The system is not in a state where the operation can proceed.
    #[error("failed precondition: {message}")]
    FailedPrecondition {
        /// Description of the violated precondition.
        message: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The operation is not implemented by this backend.
    #[error("not implemented: {message}")]
    Unimplemented {
        /// Description of the unimplemented operation.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The backend cannot be reached on this host.
    #[error("backend unavailable: {message}")]
    Unavailable {
        /// Description of why the backend is unavailable.
        message: String,
    },

    /// The invocation itself is malformed (unknown command, bad arity).
    #[error("usage: {message}")]
    Usage {
        /// Description of the usage error.
        message: String,
    },
}

impl WardenError {
    /// Returns the stable process exit code for this failure kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled { .. } => 1,
            Self::Unknown { .. } => 2,
            Self::InvalidArgument { .. } => 3,
            Self::NotFound { .. } => 5,
            Self::AlreadyExists { .. } => 6,
            Self::PermissionDenied { .. } => 7,
            Self::FailedPrecondition { .. } => 9,
            Self::Io { .. } => 10,
            Self::Unimplemented { .. } => 12,
            Self::Serialization { .. } => 13,
            Self::Unavailable { .. } => 14,
            Self::Usage { .. } => 64,
        }
    }

    /// Shorthand for a [`WardenError::Cancelled`] failure.
    #[must_use]
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    /// Shorthand for a [`WardenError::InvalidArgument`] failure.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for a [`WardenError::Usage`] failure.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, WardenError>;
