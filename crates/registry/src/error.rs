//! Registry validation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the export graph.
///
/// All variants are configuration errors: they abort a build before any
/// bundle is emitted, and each one names the offending module or category so
/// the build invoker can find it in `registry.toml`.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Module and category names share one namespace; a collision anywhere
    /// in the manifest is fatal.
    #[error("duplicate export name `{name}`")]
    DuplicateName { name: String },

    #[error("category `{category}` lists unknown member `{member}`")]
    UnknownMember { category: String, member: String },

    #[error("module `{module}` depends on unknown module `{dep}`")]
    UnknownDependency { module: String, dep: String },

    #[error("dependency cycle through module `{name}`")]
    DependencyCycle { name: String },

    #[error("entry path `{path}` of `{name}` escapes the package root")]
    PathEscape { name: String, path: String },

    #[error("unknown module `{name}`")]
    UnknownModule { name: String },
}
