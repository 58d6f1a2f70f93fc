//! Entry-path resolution.
//!
//! Source entries in `registry.toml` may use the `@/` alias to refer to the
//! package `src/` root. The alias is a manifest-only convenience: it is
//! resolved here, at graph-construction time, and must never survive into an
//! emitted artifact.

use std::path::{Component, PathBuf};

use crate::error::RegistryError;

/// Prefix denoting the package `src/` root in manifest paths.
pub const SRC_ALIAS: &str = "@/";

/// Resolve a manifest path to a concrete package-root-relative path.
///
/// `@/components/button/component.rs` becomes
/// `src/components/button/component.rs`; paths without the alias are taken as
/// package-root-relative already. Absolute paths and any `..` traversal are
/// rejected so an entry can never reach outside the package.
pub fn resolve_entry(name: &str, raw: &str) -> Result<PathBuf, RegistryError> {
    let escape = || RegistryError::PathEscape {
        name: name.to_string(),
        path: raw.to_string(),
    };

    if raw.is_empty() {
        return Err(escape());
    }

    let relative = match raw.strip_prefix(SRC_ALIAS) {
        Some(rest) => PathBuf::from("src").join(rest),
        None => PathBuf::from(raw),
    };

    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            // Anything that can climb or re-root the path is out.
            _ => return Err(escape()),
        }
    }

    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alias_resolves_under_src() {
        let path = resolve_entry("button", "@/components/button/component.rs").unwrap();
        assert_eq!(path, PathBuf::from("src/components/button/component.rs"));
    }

    #[test]
    fn plain_paths_are_package_relative() {
        let path = resolve_entry("style", "assets/prism.css").unwrap();
        assert_eq!(path, PathBuf::from("assets/prism.css"));
    }

    #[test]
    fn parent_traversal_is_rejected() {
        assert!(resolve_entry("evil", "@/../secrets.rs").is_err());
        assert!(resolve_entry("evil", "../outside.rs").is_err());
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(resolve_entry("evil", "/etc/passwd").is_err());
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(resolve_entry("empty", "").is_err());
    }
}
