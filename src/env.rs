//! Environment lookups that tests can replace.
//!
//! Config and logging read their overrides through [`Env`] so layering can
//! be checked against a fixed table instead of the process environment.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Source of environment overrides.
#[derive(Clone, Debug, Default)]
pub enum Env {
    /// The real process environment.
    #[default]
    Process,
    /// A fixed set of variables; anything else is unset.
    Fixed(HashMap<String, String>),
}

impl Env {
    pub fn real() -> Self {
        Env::Process
    }

    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Env::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Trimmed value of `name`. Unset, blank and non-UTF-8 values are all
    /// treated as absent.
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = match self {
            Env::Process => std::env::var(name).ok()?,
            Env::Fixed(vars) => vars.get(name)?.clone(),
        };
        let value = raw.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Parse `name` into `T`. A value that fails to parse is logged and
    /// ignored so a typo in the environment never aborts the run.
    pub fn parse<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("ignoring invalid {name} value {raw:?}: {e}");
                None
            }
        }
    }
}
