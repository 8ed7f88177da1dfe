//! The argument scanner.
//!
//! [`scan`] is a pure function from a raw argument list and an
//! [`OptionSchema`] to parsed options plus positional arguments. It never
//! fails: unrecognized options are dropped from the output entirely (they
//! become neither options nor positionals), which mirrors the grammar's
//! historical behavior; each drop is logged at debug level.
//!
//! Grammar:
//! - `--name` / `--name=value`; long options never consume a following token
//! - `-x` / `-x=value` / `-x value` (the next token is only consumed when the
//!   option is value-taking and the token does not start with `-`)
//! - anything else, including `-` alone, is positional

use std::collections::HashMap;

use crate::opts::schema::{OptionDef, OptionSchema, OptionValue};

/// Options resolved by a scan, keyed by both long and short names.
///
/// Every recorded option is present under its long name and, when the
/// definition has one, its short alias, so callers may query either key.
#[derive(Debug, Clone, Default)]
pub struct ParsedOptions {
    values: HashMap<String, OptionValue>,
}

impl ParsedOptions {
    /// Direct lookup by key. No alias resolution; the scanner records both
    /// keys, so a miss here means the option was never set.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Whether the key was recorded.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys recorded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn record(&mut self, def: &OptionDef, value: OptionValue) {
        if let Some(short) = def.short_name() {
            self.values.insert(short.to_string(), value.clone());
        }
        self.values.insert(def.long().to_string(), value);
    }
}

/// Output of a single scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub options: ParsedOptions,
    pub positionals: Vec<String>,
}

/// Scan a raw argument list against a schema.
///
/// Single left-to-right pass; attached `=` values take priority over
/// consuming the next token, and a next token is never consumed as a value
/// when it begins with `-`. After the pass, defaults fill every definition
/// that was not explicitly set; explicit values always win over defaults.
pub fn scan(args: &[String], schema: &OptionSchema) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if let Some(rest) = arg.strip_prefix("--") {
            scan_long(rest, schema, &mut outcome.options);
            i += 1;
        } else if arg.len() > 1 && arg.starts_with('-') {
            i += scan_short(args, i, schema, &mut outcome.options);
        } else {
            outcome.positionals.push(arg.clone());
            i += 1;
        }
    }

    apply_defaults(schema, &mut outcome.options);
    outcome
}

fn scan_long(rest: &str, schema: &OptionSchema, options: &mut ParsedOptions) {
    let (name, value) = match rest.split_once('=') {
        Some((name, value)) => (name, OptionValue::Text(value.to_string())),
        None => (rest, OptionValue::Flag(true)),
    };
    match schema.by_long(name) {
        Some(def) => options.record(def, value),
        None => tracing::debug!(option = name, "dropping unrecognized long option"),
    }
}

/// Returns the number of tokens consumed (1 or 2).
fn scan_short(
    args: &[String],
    i: usize,
    schema: &OptionSchema,
    options: &mut ParsedOptions,
) -> usize {
    let arg = &args[i];
    let Some(short) = arg[1..].chars().next() else {
        return 1;
    };
    let Some(def) = schema.by_short(short) else {
        tracing::debug!(option = %short, "dropping unrecognized short option");
        return 1;
    };

    let mut consumed = 1;
    let value = if def.takes_value() {
        if arg.len() > 2 && arg.as_bytes()[2] == b'=' {
            OptionValue::Text(arg[3..].to_string())
        } else if let Some(next) = args.get(i + 1).filter(|next| !next.starts_with('-')) {
            consumed = 2;
            OptionValue::Text(next.clone())
        } else {
            OptionValue::Flag(true)
        }
    } else {
        OptionValue::Flag(true)
    };

    options.record(def, value);
    consumed
}

fn apply_defaults(schema: &OptionSchema, options: &mut ParsedOptions) {
    for def in schema.defs() {
        let Some(default) = def.default() else {
            continue;
        };
        let set = options.is_set(def.long())
            || def
                .short_name()
                .is_some_and(|c| options.is_set(&c.to_string()));
        if !set {
            options.record(def, default.clone());
        }
    }
}
