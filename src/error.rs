//! Error types for console operations.
//!
//! This module defines [`ConsoleError`], the primary error type used
//! throughout the crate, the [`CommandFailure`] wrapper produced by the
//! execute boundary, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ConsoleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ConsoleError::Other`) for unexpected errors
//! - Every fault that escapes a command's `run()` is normalized into exactly
//!   one `CommandFailure` carrying the command name and a classification code

use std::path::PathBuf;
use thiserror::Error;

/// Classification codes carried by [`CommandFailure`] and used as process
/// exit codes.
pub mod code {
    pub const INVALID_ARGUMENT: u8 = 1;
    pub const COMMAND_NOT_FOUND: u8 = 2;
    pub const EXECUTION_FAILED: u8 = 3;
    pub const PERMISSION_DENIED: u8 = 4;
    pub const UNKNOWN: u8 = 255;
}

/// Core error type for console operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Malformed or missing required input.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The requested name resolves to nothing in either command table.
    #[error("command `{name}` not found")]
    CommandNotFound { name: String },

    /// The command's own logic faulted.
    #[error("{message}")]
    ExecutionFailed { message: String },

    /// Filesystem or privilege failure during a command's side effects.
    #[error("permission denied: {message}")]
    PermissionDenied { message: String },

    /// Configuration file not found at expected location.
    #[error("configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or command-table file.
    #[error("failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Refusing to overwrite an existing file during scaffolding.
    #[error("file already exists: {path}")]
    FileExists { path: PathBuf },

    /// Referenced scaffold template does not exist.
    #[error("unknown template: {name}")]
    TemplateMissing { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConsoleError {
    /// Classification code for this error.
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. } => code::INVALID_ARGUMENT,
            Self::CommandNotFound { .. } => code::COMMAND_NOT_FOUND,
            Self::PermissionDenied { .. } => code::PERMISSION_DENIED,
            Self::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                code::PERMISSION_DENIED
            }
            Self::ExecutionFailed { .. }
            | Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::FileExists { .. }
            | Self::TemplateMissing { .. }
            | Self::Io(_) => code::EXECUTION_FAILED,
            Self::Other(_) => code::UNKNOWN,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn command_not_found(name: impl Into<String>) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }
}

/// Normalized failure produced by the execute boundary.
///
/// Carries the declared name of the faulting command, the classification
/// code of the original fault, and the fault itself as the cause chain.
#[derive(Debug, Error)]
#[error("error executing command `{command}`: {source}")]
pub struct CommandFailure {
    /// Declared name of the command that faulted.
    pub command: String,

    /// Classification code (see [`code`]).
    pub code: u8,

    /// The original fault.
    #[source]
    pub source: ConsoleError,
}

impl CommandFailure {
    /// Wrap a fault raised while executing the named command.
    pub fn new(command: impl Into<String>, source: ConsoleError) -> Self {
        Self {
            command: command.into(),
            code: source.code(),
            source,
        }
    }
}

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
