//! Environment lookups for the `SRPCALC_*` overrides.
//!
//! [`crate::config::Config`] reads overflow mode, output format and the
//! colour switch through an [`Env`] rather than `std::env` directly, so
//! config tests can hand it a fixed set of variables.

use std::collections::HashMap;

/// Source of environment variables: the process, or a fixed map.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read only from `vars`; the process environment is never consulted.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let fixed = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fixed: Some(fixed) }
    }

    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.fixed {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Boolean switch such as `SRPCALC_NO_COLOR`.
    ///
    /// Unset, empty, `0`, `false`, `no` and `off` all read as off; any
    /// other value reads as on.
    pub fn flag(&self, name: &str) -> bool {
        match self.var(name) {
            Ok(val) => !matches!(
                val.trim().to_lowercase().as_str(),
                "" | "0" | "false" | "no" | "off"
            ),
            Err(_) => false,
        }
    }
}
