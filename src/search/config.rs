use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed search config: {info}")]
    Malformed { info: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed {
            info: value.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Bounds applied by the searchers.
///
/// The default is unbounded: every state taken from the frontier
/// that is not a goal gets expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// States at this depth are goal-tested but never expanded.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Config {
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        ConfigBuilder::new().max_depth(max_depth).build()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn allows_expansion(&self, depth: usize) -> bool {
        depth < self.max_depth.unwrap_or(usize::MAX)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct ConfigBuilder {
    max_depth: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn build(self) -> Config {
        Config {
            max_depth: self.max_depth,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
