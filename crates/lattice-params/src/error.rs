use core::fmt;
use std::path::PathBuf;

/// A configuration that must not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unrecognized configuration key `{key}`")]
    UnrecognizedKey { key: String },

    #[error("{name} is a protocol-fixed constant and cannot be overridden")]
    ProtocolFixed { name: &'static str },

    #[error("malformed value for {name}: {reason}")]
    Malformed { name: &'static str, reason: String },

    #[error("{name} is set more than once")]
    Duplicate { name: &'static str },

    #[error("configuration is pinned to profile `{found}` but is being loaded as `{expected}`")]
    ProfileMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("parameter registry is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Inconsistent(#[from] ConsistencyError),
}

impl ConfigurationError {
    /// Parameter or key this error is about, when there is exactly one.
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            ConfigurationError::UnrecognizedKey { key } => Some(key.as_str()),
            ConfigurationError::ProtocolFixed { name }
            | ConfigurationError::Malformed { name, .. }
            | ConfigurationError::Duplicate { name } => Some(*name),
            ConfigurationError::Inconsistent(e) if e.violations.len() == 1 => {
                e.violations[0].params.first().copied()
            }
            _ => None,
        }
    }
}

/// One broken cross-parameter invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub params: Vec<&'static str>,
    pub message: String,
}

impl Violation {
    pub fn new(params: &[&'static str], message: impl Into<String>) -> Self {
        Self {
            params: params.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.params.join(", "), self.message)
    }
}

/// Every violated invariant of a parameter set, never just the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsistencyError {
    pub violations: Vec<Violation>,
}

impl ConsistencyError {
    pub fn mentions(&self, name: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.params.iter().any(|p| *p == name))
    }
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} parameter invariant(s) violated",
            self.violations.len()
        )?;
        for v in &self.violations {
            write!(f, "\n  - {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConsistencyError {}

/// Lookup of a name outside the closed catalogue. A programming error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter `{name}`")]
pub struct UnknownParameterError {
    pub name: String,
}

impl UnknownParameterError {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Everything the process entry point can be handed; all of it is fatal.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameterError),
}
