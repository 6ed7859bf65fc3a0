use std::env::var;
use tracing::warn;

/// How many eval frames may be nested before evaluation is abandoned.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// The environment variable the entry point reads to override the recursion limit.
pub const RECURSION_LIMIT_VAR: &str = "CATTO_RECURSION_LIMIT";

/// Settings for a single interpreter instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// The maximum number of nested evaluation frames.  The outermost program counts as one frame,
    /// each active eval adds another.
    pub recursion_limit: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl InterpreterConfig {
    /// Replace the recursion limit.  A limit of zero is raised to one so the top level program can
    /// always run.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit.max(1);
        self
    }

    /// Build the configuration from the process environment.  A missing variable leaves the
    /// default in place, a malformed one is reported and ignored.
    pub fn from_env() -> Self {
        let config = InterpreterConfig::default();

        match var(RECURSION_LIMIT_VAR) {
            Ok(text) => match text.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.with_recursion_limit(limit),
                _ => {
                    warn!(
                        value = %text,
                        "{} must be a positive integer, using the default of {}.",
                        RECURSION_LIMIT_VAR,
                        DEFAULT_RECURSION_LIMIT
                    );
                    config
                }
            },
            Err(_) => config,
        }
    }
}
