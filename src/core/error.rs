//! Generator error type.

use std::path::PathBuf;

/// Errors from loading the catalog, rendering, and writing the declaration.
///
/// Every variant is fatal: the CLI prints it and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing field `{field}` in {context}")]
    MissingField { context: String, field: String },
    #[error("invalid field `{field}` in {context}: {reason}")]
    InvalidField {
        context: String,
        field: String,
        reason: String,
    },
    #[error("{} is out of date; run the generator to refresh it", .path.display())]
    Stale { path: PathBuf },
    #[error("no champion matches '{0}'")]
    NotFound(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl GenError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing(context: impl Into<String>, field: impl Into<String>) -> Self {
        GenError::MissingField {
            context: context.into(),
            field: field.into(),
        }
    }

    pub(crate) fn invalid(
        context: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GenError::InvalidField {
            context: context.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
