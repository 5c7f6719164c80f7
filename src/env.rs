//! Current-environment lookup.

/// Source for the currently active environment name.
///
/// Resolvers never read process-wide state themselves; the environment name
/// is supplied by an injected source so resolution stays independently
/// testable.
pub trait EnvironmentSource {
    /// The active environment name, if one is set.
    fn current(&self) -> Option<String>;
}

/// Environment source reading an ordered list of process variables.
///
/// The first variable with a non-blank value wins.
#[derive(Debug, Clone)]
pub struct VarEnvironment {
    vars: Vec<String>,
}

impl VarEnvironment {
    /// Create a source reading the given variables, in order.
    pub fn new<I, S>(vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for VarEnvironment {
    fn default() -> Self {
        Self::new(["APP_ENV", "RACK_ENV"])
    }
}

impl EnvironmentSource for VarEnvironment {
    fn current(&self) -> Option<String> {
        self.vars
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
    }
}

/// Environment source that always answers with a fixed name, or nothing.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(Option<String>);

impl FixedEnvironment {
    /// A source naming a fixed environment.
    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// A source with no environment at all.
    pub fn none() -> Self {
        Self(None)
    }
}

impl EnvironmentSource for FixedEnvironment {
    fn current(&self) -> Option<String> {
        self.0.clone()
    }
}
