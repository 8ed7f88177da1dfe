//! Invocation context.
//!
//! A [`Context`] carries the requested command name, the derived action,
//! and the raw argument list into the dispatch core. It is built once at
//! the process entry point and treated as read-only from then on.

/// The external input to a single console invocation.
#[derive(Debug, Clone)]
pub struct Context {
    command: String,
    action: String,
    args: Vec<String>,
}

impl Context {
    /// Create a context for a requested command name and its raw arguments.
    ///
    /// The action is the portion of the name after the first `:`, e.g.
    /// `create:migration` has action `migration`. Names without a colon
    /// have an empty action.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        let command = command.into();
        let action = command
            .split_once(':')
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_default();
        Self {
            command,
            action,
            args,
        }
    }

    /// Full requested command name, e.g. `create:migration`.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Derived sub-action, e.g. `migration`. Empty when the name has no colon.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Raw argument list, untouched by any parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether the requested name carries a sub-command qualifier.
    pub fn is_namespaced(&self) -> bool {
        !self.action.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_has_empty_action() {
        let ctx = Context::new("migrate", vec![]);
        assert_eq!(ctx.command(), "migrate");
        assert_eq!(ctx.action(), "");
        assert!(!ctx.is_namespaced());
    }

    #[test]
    fn namespaced_name_derives_action() {
        let ctx = Context::new("create:migration", vec!["users".to_string()]);
        assert_eq!(ctx.command(), "create:migration");
        assert_eq!(ctx.action(), "migration");
        assert!(ctx.is_namespaced());
        assert_eq!(ctx.args(), ["users".to_string()]);
    }

    #[test]
    fn action_keeps_everything_after_first_colon() {
        let ctx = Context::new("a:b:c", vec![]);
        assert_eq!(ctx.action(), "b:c");
    }
}
