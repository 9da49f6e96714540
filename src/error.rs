use std::path::PathBuf;
use thiserror::Error;

/// Failures loading `container-groups.yml` or `stackctl.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Errors surfaced by group operations.
///
/// Unknown group names during enable/disable are not errors, they come back
/// as [`Diagnostic`]s on the report.
#[derive(Error, Debug)]
pub enum GroupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no groups specified")]
    Usage,

    #[error("group '{0}' not found")]
    UnknownGroup(String),

    #[error("failed to {action}: {source:#}")]
    Orchestrator {
        action: String,
        #[source]
        source: anyhow::Error,
    },
}

impl GroupError {
    pub fn orchestrator(action: impl Into<String>) -> impl FnOnce(anyhow::Error) -> Self {
        let action = action.into();
        move |source| Self::Orchestrator { action, source }
    }
}

/// Non-fatal findings collected while an operation keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownGroup(String),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGroup(name) => write!(f, "Warning: Group '{name}' not found"),
        }
    }
}
