//! Built-in command implementations.
//!
//! Each command implements the [`Command`] trait: it declares an option
//! schema and a `run` body, and inherits argument scanning, help text, and
//! uniform fault wrapping from the dispatch layer.

pub mod create;
pub mod dispatcher;
pub mod init;
pub mod migrate;
pub mod run;
pub mod welcome;

pub use dispatcher::{execute, Command, Dispatcher, Invocation};
