//! Named overrides for node-tier settings.
//!
//! A configuration file is a flat TOML table. Keys are parameter names, in
//! canonical or all-lowercase spelling, plus the reserved `profile` key:
//!
//! ```toml
//! profile = "production"
//! message_timeout = 7500
//! force_keep_final_period = 40
//! minimal_fees = "0.01"
//! ```
//!
//! Resolution happens at initialization so that every rejection (unknown
//! key, protocol-fixed name, malformed value) surfaces from the same place.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::ConfigurationError;
use crate::name::{NodeParam, ParamName};
use crate::settings::NodeSettings;

/// Key that pins a configuration file to one profile.
pub const PROFILE_KEY: &str = "profile";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    profile: Option<String>,
    entries: BTreeMap<String, toml::Value>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigurationError> {
        let mut table: toml::Table = content.parse()?;
        let profile = table.remove(PROFILE_KEY).map(profile_name).transpose()?;
        Ok(Self {
            profile,
            entries: table.into_iter().collect(),
        })
    }

    /// Adds one entry. `profile` pins the profile exactly as it does in a
    /// file; a non-string profile is kept and rejected by `apply`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        let key = key.into();
        match value.into() {
            toml::Value::String(s) if key == PROFILE_KEY => self.profile = Some(s),
            value => {
                self.entries.insert(key, value);
            }
        }
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies every entry to `settings` and returns the parameters touched.
    ///
    /// On error `settings` may be partially written; callers discard it.
    pub(crate) fn apply(
        &self,
        profile: &'static str,
        settings: &mut NodeSettings,
    ) -> Result<BTreeSet<NodeParam>, ConfigurationError> {
        if let Some(found) = self.profile.as_deref() {
            if found != profile {
                return Err(ConfigurationError::ProfileMismatch {
                    expected: profile,
                    found: found.to_string(),
                });
            }
        }

        let mut applied = BTreeSet::new();
        for (key, raw) in &self.entries {
            if key == PROFILE_KEY {
                profile_name(raw.clone())?;
            }
            let param = match ParamName::lookup(key) {
                None => {
                    return Err(ConfigurationError::UnrecognizedKey { key: key.clone() });
                }
                Some(ParamName::Protocol(p)) => {
                    return Err(ConfigurationError::ProtocolFixed { name: p.as_str() });
                }
                Some(ParamName::Node(n)) => n,
            };
            if !applied.insert(param) {
                return Err(ConfigurationError::Duplicate {
                    name: param.as_str(),
                });
            }
            settings.apply(param, raw)?;
            tracing::debug!(param = param.as_str(), value = %raw, "applied parameter override");
        }
        Ok(applied)
    }
}

fn profile_name(raw: toml::Value) -> Result<String, ConfigurationError> {
    match raw {
        toml::Value::String(s) => Ok(s),
        other => Err(ConfigurationError::Malformed {
            name: PROFILE_KEY,
            reason: format!("expected a string, got {}", other.type_str()),
        }),
    }
}
