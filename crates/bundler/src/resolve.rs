//! Cross-module reference validation.
//!
//! A per-module bundle carries only its own sources, so every `crate::` path
//! it mentions must resolve through a dependency declared in the registry.
//! An undeclared reference would compile fine in the aggregated tree and
//! break only for per-module consumers; catching it here keeps the two
//! passes mutually consistent.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use prism_registry::{ExportGraph, LogicalModule};
use regex::Regex;

use crate::emit::rust_module_path;
use crate::error::BundleError;

fn crate_path_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"crate::[A-Za-z0-9_]+(?:::[A-Za-z0-9_]+)*").expect("static pattern compiles"))
}

/// Map from rust module path (`crate::components::button`) to logical name.
fn path_index(graph: &ExportGraph) -> BTreeMap<String, String> {
    graph
        .modules()
        .map(|m| (rust_module_path(&m.entry), m.name.clone()))
        .collect()
}

/// Resolve a referenced `crate::` path to the logical module owning it, by
/// longest matching prefix.
fn owner_of<'a>(index: &'a BTreeMap<String, String>, reference: &str) -> Option<&'a str> {
    index
        .iter()
        .filter(|(path, _)| {
            reference == path.as_str() || reference.starts_with(&format!("{path}::"))
        })
        .max_by_key(|(path, _)| path.len())
        .map(|(_, name)| name.as_str())
}

/// Check one module's source against its declared dependencies.
pub fn validate_module_references(
    graph: &ExportGraph,
    module: &LogicalModule,
    source: &str,
) -> Result<(), BundleError> {
    let index = path_index(graph);
    for found in crate_path_pattern().find_iter(source) {
        let reference = found.as_str();
        match owner_of(&index, reference) {
            Some(owner) if owner == module.name => {}
            Some(owner) => {
                if !module.deps.iter().any(|d| d == owner) {
                    return Err(BundleError::module(
                        &module.name,
                        format!("references `{owner}` ({reference}) without declaring it as a dependency"),
                    ));
                }
            }
            None => {
                return Err(BundleError::module(
                    &module.name,
                    format!("references `{reference}`, which no registered module provides"),
                ));
            }
        }
    }
    Ok(())
}

/// Validate every module's references in one sweep. Used by `check` and by
/// the per-module pass.
pub fn validate_references(graph: &ExportGraph, package_root: &Path) -> Result<(), BundleError> {
    for module in graph.modules() {
        let path = package_root.join(&module.entry);
        let source = std::fs::read_to_string(&path)
            .map_err(|e| BundleError::module(&module.name, format!("unreadable entry {}: {e}", path.display())))?;
        validate_module_references(graph, module, &source)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_registry::{CategoryEntry, ModuleEntry, ModuleKind, PackageSection, RegistryDoc};

    fn graph() -> ExportGraph {
        let doc = RegistryDoc {
            package: PackageSection {
                name: "prism-ui".to_string(),
                style: None,
                peers: vec![],
            },
            modules: vec![
                ModuleEntry {
                    name: "button".to_string(),
                    kind: ModuleKind::Component,
                    path: "@/components/button/component.rs".to_string(),
                    deps: vec!["utils".to_string()],
                    assets: vec![],
                },
                ModuleEntry {
                    name: "utils".to_string(),
                    kind: ModuleKind::Util,
                    path: "@/utils.rs".to_string(),
                    deps: vec![],
                    assets: vec![],
                },
                ModuleEntry {
                    name: "tooltip".to_string(),
                    kind: ModuleKind::Component,
                    path: "@/components/tooltip/component.rs".to_string(),
                    deps: vec![],
                    assets: vec![],
                },
            ],
            categories: vec![CategoryEntry {
                name: "hooks".to_string(),
                members: vec!["utils".to_string()],
            }],
        };
        ExportGraph::from_doc(doc).unwrap()
    }

    #[test]
    fn declared_references_pass() {
        let graph = graph();
        let module = graph.module("button").unwrap();
        let source = "use crate::utils::cx;\npub fn x() {}\n";
        assert!(validate_module_references(&graph, module, source).is_ok());
    }

    #[test]
    fn self_references_pass() {
        let graph = graph();
        let module = graph.module("button").unwrap();
        let source = "use crate::components::button::helper;\n";
        assert!(validate_module_references(&graph, module, source).is_ok());
    }

    #[test]
    fn undeclared_reference_fails_with_module_name() {
        let graph = graph();
        let module = graph.module("tooltip").unwrap();
        let source = "use crate::utils::cx;\n";
        let err = validate_module_references(&graph, module, source).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("tooltip"));
        assert!(message.contains("utils"));
    }

    #[test]
    fn unregistered_reference_fails() {
        let graph = graph();
        let module = graph.module("button").unwrap();
        let source = "use crate::internal::secret;\n";
        assert!(validate_module_references(&graph, module, source).is_err());
    }
}
