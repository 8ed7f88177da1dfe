//! Anvil - console runner for framework projects.
//!
//! Anvil turns a raw argument list into a structured option table plus
//! positional arguments, resolves a (possibly namespaced) command name to a
//! registered handler, and runs it under a uniform error-handling and help
//! contract. It ships the framework's built-in commands: migrations,
//! scaffolding, and project initialization.
//!
//! # Modules
//!
//! - [`commands`] - Command trait, dispatcher, and built-in commands
//! - [`config`] - Project configuration loading
//! - [`context`] - The invocation context (command, action, raw args)
//! - [`error`] - Error types and result aliases
//! - [`opts`] - Option schemas and the argument scanner
//! - [`registry`] - Command registry and name resolution
//! - [`scaffold`] - Embedded scaffold templates
//! - [`state`] - Migration ledger persistence
//! - [`ui`] - Colored console output and test capture
//!
//! # Example
//!
//! ```
//! use anvil::commands::Dispatcher;
//! use anvil::context::Context;
//! use anvil::ui::MockOutput;
//!
//! let temp = std::env::temp_dir();
//! let dispatcher = Dispatcher::new(temp);
//! let mut out = MockOutput::new();
//! dispatcher
//!     .dispatch(Context::new("welcome", vec![]), &mut out)
//!     .unwrap();
//! assert_eq!(out.successes(), ["Welcome to Anvil!"]);
//! ```

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod opts;
pub mod registry;
pub mod scaffold;
pub mod state;
pub mod ui;

pub use error::{CommandFailure, ConsoleError, Result};
