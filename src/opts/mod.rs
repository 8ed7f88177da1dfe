//! Option schemas and the argument scanner.
//!
//! # Architecture
//!
//! - [`schema`] - Per-command option tables ([`OptionDef`], [`OptionSchema`])
//! - [`scan`] - The left-to-right argument scanner
//! - [`help`] - Deterministic help text rendering

pub mod help;
pub mod scan;
pub mod schema;

pub use scan::{scan, ParsedOptions, ScanOutcome};
pub use schema::{OptionDef, OptionSchema, OptionValue};
