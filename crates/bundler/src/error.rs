//! Pipeline errors.

use std::path::PathBuf;

use prism_registry::RegistryError;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// The pipeline never degrades to a partial artifact set: any variant here
/// means nothing was swapped into the output directory.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Export graph validation failed; reported before any staging happens.
    #[error(transparent)]
    Config(#[from] RegistryError),

    /// A single module failed to bundle. Fails the whole run so consumers
    /// cannot see a stale or partial artifact set.
    #[error("failed to bundle `{name}`: {reason}")]
    Module { name: String, reason: String },

    #[error("io error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The authored Cargo feature table drifted from the export graph.
    #[error("feature table out of sync with registry: {0}")]
    Features(String),
}

impl BundleError {
    pub(crate) fn module(name: &str, reason: impl Into<String>) -> Self {
        BundleError::Module {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}
