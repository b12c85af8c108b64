use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
///
/// The browser recorder posts audio from a different origin than the API,
/// so most deployments set at least `origins`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (`"*"` or explicit list)
    #[serde(default)]
    pub origins: AnyOrList,
    /// Allowed HTTP methods (`"*"` or explicit list)
    #[serde(default)]
    pub methods: AnyOrList,
    /// Allowed request headers (`"*"` or explicit list)
    #[serde(default)]
    pub headers: AnyOrList,
    /// Allow credentials
    #[serde(default)]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// Preflight cache lifetime as a `Duration`
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either the wildcard `"*"` or an explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnyOrList")]
pub enum AnyOrList {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrList {
    One(String),
    Many(Vec<String>),
}

impl From<RawAnyOrList> for AnyOrList {
    fn from(raw: RawAnyOrList) -> Self {
        let values = match raw {
            RawAnyOrList::One(value) => vec![value],
            RawAnyOrList::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Self::Any
        } else {
            Self::List(values)
        }
    }
}
