//! Option definitions and per-command schemas.
//!
//! Every command declares an [`OptionSchema`]: an ordered table of the
//! options it recognizes. Schemas are static data, created once per command
//! type; declaration order is preserved for help rendering.

/// A resolved option value.
///
/// Options that appear without a value (and flag-style options) resolve to
/// `Flag(true)`; `=`-attached or consumed-token values resolve to `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl OptionValue {
    /// Truthiness of the value: flags as-is, text values when non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// The textual value, if one was supplied.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Flag(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Declaration of a single recognized option.
#[derive(Debug, Clone)]
pub struct OptionDef {
    long: String,
    short: Option<char>,
    takes_value: bool,
    default: Option<OptionValue>,
    help: String,
}

impl OptionDef {
    /// Declare a boolean option (`--name` / `-x`).
    pub fn flag(long: &str, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short: None,
            takes_value: false,
            default: None,
            help: help.to_string(),
        }
    }

    /// Declare a value-taking option (`--name=value` / `-x value`).
    pub fn value(long: &str, help: &str) -> Self {
        Self {
            takes_value: true,
            ..Self::flag(long, help)
        }
    }

    /// Attach a single-character short alias.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Attach a default applied when the option is absent from the input.
    pub fn default_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn takes_value(&self) -> bool {
        self.takes_value
    }

    pub fn default(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Ordered, per-command table of recognized options.
#[derive(Debug, Clone, Default)]
pub struct OptionSchema {
    defs: Vec<OptionDef>,
}

impl OptionSchema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// The schema shared by every command: `--help` / `-h`.
    pub fn base() -> Self {
        Self::new().with(OptionDef::flag("help", "prints help message").short('h'))
    }

    /// Append a definition, preserving declaration order.
    pub fn with(mut self, def: OptionDef) -> Self {
        self.defs.push(def);
        self
    }

    /// Definitions in declaration order.
    pub fn defs(&self) -> &[OptionDef] {
        &self.defs
    }

    /// Look up a definition by its long name.
    pub fn by_long(&self, long: &str) -> Option<&OptionDef> {
        self.defs.iter().find(|d| d.long == long)
    }

    /// Look up a definition by its short alias.
    pub fn by_short(&self, short: char) -> Option<&OptionDef> {
        self.defs.iter().find(|d| d.short == Some(short))
    }

    /// Resolve the counterpart key for a long or short name, if any.
    ///
    /// `output` -> `o` and `o` -> `output`. Returns `None` for unknown keys
    /// and for definitions without a short alias.
    pub fn alias_of(&self, key: &str) -> Option<String> {
        if let Some(def) = self.by_long(key) {
            return def.short.map(|c| c.to_string());
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.by_short(c).map(|d| d.long.clone()),
            _ => None,
        }
    }
}
