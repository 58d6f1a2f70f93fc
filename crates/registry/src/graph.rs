//! Validated export graph.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::alias::resolve_entry;
use crate::error::RegistryError;
use crate::schema::{ModuleKind, RegistryDoc};
use crate::surface::{scan_source, ExportSurface};

/// A validated logical module: one publishable unit of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalModule {
    pub name: String,
    pub kind: ModuleKind,
    /// Entry source file, package-root-relative. Alias-free.
    pub entry: PathBuf,
    /// Direct dependencies on other logical modules, sorted and deduplicated.
    pub deps: Vec<String>,
    /// Style assets shipped with the module, package-root-relative.
    pub assets: Vec<PathBuf>,
}

/// A validated category aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Member module names, sorted and deduplicated.
    pub members: Vec<String>,
}

/// The validated mapping from export names to implementation modules.
///
/// Constructing one performs every configuration check the build relies on;
/// a value of this type is guaranteed collision-free, dangling-reference-free
/// and acyclic.
#[derive(Debug, Clone)]
pub struct ExportGraph {
    pub package: String,
    /// Package-level stylesheet, if declared.
    pub style: Option<PathBuf>,
    /// Peer runtimes, sorted. Never bundled.
    pub peers: Vec<String>,
    modules: BTreeMap<String, LogicalModule>,
    categories: BTreeMap<String, Category>,
}

impl ExportGraph {
    /// Load and validate `registry.toml` from disk.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: RegistryDoc = toml::from_str(&text).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_doc(doc)
    }

    /// Validate a parsed manifest into a graph.
    pub fn from_doc(doc: RegistryDoc) -> Result<Self, RegistryError> {
        let mut modules = BTreeMap::new();

        for entry in &doc.modules {
            let module = LogicalModule {
                name: entry.name.clone(),
                kind: entry.kind,
                entry: resolve_entry(&entry.name, &entry.path)?,
                deps: sorted_unique(&entry.deps),
                assets: entry
                    .assets
                    .iter()
                    .map(|a| resolve_entry(&entry.name, a))
                    .collect::<Result<Vec<_>, _>>()?,
            };
            if modules.insert(entry.name.clone(), module).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        let mut categories = BTreeMap::new();
        for entry in &doc.categories {
            if modules.contains_key(&entry.name) || categories.contains_key(&entry.name) {
                return Err(RegistryError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
            for member in &entry.members {
                if !modules.contains_key(member) {
                    return Err(RegistryError::UnknownMember {
                        category: entry.name.clone(),
                        member: member.clone(),
                    });
                }
            }
            categories.insert(
                entry.name.clone(),
                Category {
                    name: entry.name.clone(),
                    members: sorted_unique(&entry.members),
                },
            );
        }

        for module in modules.values() {
            for dep in &module.deps {
                if !modules.contains_key(dep) {
                    return Err(RegistryError::UnknownDependency {
                        module: module.name.clone(),
                        dep: dep.clone(),
                    });
                }
            }
        }

        let graph = ExportGraph {
            package: doc.package.name,
            style: doc
                .package
                .style
                .as_deref()
                .map(|s| resolve_entry("package.style", s))
                .transpose()?,
            peers: sorted_unique(&doc.package.peers),
            modules,
            categories,
        };
        graph.check_acyclic()?;
        Ok(graph)
    }

    fn check_acyclic(&self) -> Result<(), RegistryError> {
        let mut petgraph = DiGraph::<&str, ()>::new();
        let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();
        for name in self.modules.keys() {
            nodes.insert(name, petgraph.add_node(name));
        }
        for module in self.modules.values() {
            for dep in &module.deps {
                petgraph.add_edge(nodes[module.name.as_str()], nodes[dep.as_str()], ());
            }
        }
        toposort(&petgraph, None)
            .map(|_| ())
            .map_err(|cycle| RegistryError::DependencyCycle {
                name: petgraph[cycle.node_id()].to_string(),
            })
    }

    pub fn module(&self, name: &str) -> Result<&LogicalModule, RegistryError> {
        self.modules
            .get(name)
            .ok_or_else(|| RegistryError::UnknownModule {
                name: name.to_string(),
            })
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// All logical modules, in name order.
    pub fn modules(&self) -> impl Iterator<Item = &LogicalModule> {
        self.modules.values()
    }

    /// All category aggregates, in name order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// The transitive dependency set of a module (the module itself excluded).
    pub fn closure(&self, name: &str) -> Result<BTreeSet<String>, RegistryError> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<String> = self.module(name)?.deps.clone();
        while let Some(next) = stack.pop() {
            if seen.insert(next.clone()) {
                stack.extend(self.module(&next)?.deps.iter().cloned());
            }
        }
        Ok(seen)
    }

    /// Public export surface of a module, read from its entry source.
    pub fn module_surface(
        &self,
        package_root: &Path,
        module: &LogicalModule,
    ) -> Result<ExportSurface, std::io::Error> {
        let source = std::fs::read_to_string(package_root.join(&module.entry))?;
        Ok(scan_source(&source))
    }

    /// Union surface of a category's members.
    ///
    /// Members were validated at construction, so the lookups cannot fail.
    pub fn category_surface(
        &self,
        package_root: &Path,
        category: &Category,
    ) -> Result<ExportSurface, std::io::Error> {
        let mut union = ExportSurface::default();
        for member in &category.members {
            if let Some(module) = self.modules.get(member) {
                union.extend(self.module_surface(package_root, module)?);
            }
        }
        Ok(union)
    }
}

fn sorted_unique(items: &[String]) -> Vec<String> {
    let set: BTreeSet<&String> = items.iter().collect();
    set.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CategoryEntry, ModuleEntry, PackageSection};
    use pretty_assertions::assert_eq;

    fn module(name: &str, deps: &[&str]) -> ModuleEntry {
        ModuleEntry {
            name: name.to_string(),
            kind: ModuleKind::Component,
            path: format!("@/components/{name}/component.rs"),
            deps: deps.iter().map(|d| d.to_string()).collect(),
            assets: vec![],
        }
    }

    fn doc(modules: Vec<ModuleEntry>, categories: Vec<CategoryEntry>) -> RegistryDoc {
        RegistryDoc {
            package: PackageSection {
                name: "prism-ui".to_string(),
                style: None,
                peers: vec!["dioxus".to_string()],
            },
            modules,
            categories,
        }
    }

    #[test]
    fn duplicate_module_name_is_rejected() {
        let err = ExportGraph::from_doc(doc(
            vec![module("button", &[]), module("button", &[])],
            vec![],
        ))
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { name } if name == "button"));
    }

    #[test]
    fn category_may_not_shadow_a_module() {
        let err = ExportGraph::from_doc(doc(
            vec![module("button", &[])],
            vec![CategoryEntry {
                name: "button".to_string(),
                members: vec!["button".to_string()],
            }],
        ))
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn dangling_category_member_is_rejected() {
        let err = ExportGraph::from_doc(doc(
            vec![module("button", &[])],
            vec![CategoryEntry {
                name: "hooks".to_string(),
                members: vec!["use-theme".to_string()],
            }],
        ))
        .unwrap_err();
        assert!(
            matches!(err, RegistryError::UnknownMember { category, member }
                if category == "hooks" && member == "use-theme")
        );
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let err =
            ExportGraph::from_doc(doc(vec![module("button", &["nope"])], vec![])).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownDependency { module, dep }
            if module == "button" && dep == "nope"));
    }

    #[test]
    fn dependency_cycle_is_rejected() {
        let err = ExportGraph::from_doc(doc(
            vec![
                module("a", &["b"]),
                module("b", &["c"]),
                module("c", &["a"]),
            ],
            vec![],
        ))
        .unwrap_err();
        assert!(matches!(err, RegistryError::DependencyCycle { .. }));
    }

    #[test]
    fn closure_is_transitive_and_excludes_self() {
        let graph = ExportGraph::from_doc(doc(
            vec![
                module("tooltip-button", &["button", "tooltip"]),
                module("tooltip", &["tooltip-provider"]),
                module("tooltip-provider", &[]),
                module("button", &["utils"]),
                module("utils", &[]),
                module("hooks-only", &[]),
            ],
            vec![],
        ))
        .unwrap();

        let closure = graph.closure("tooltip-button").unwrap();
        let expected: BTreeSet<String> = ["button", "tooltip", "tooltip-provider", "utils"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(closure, expected);

        // An unrelated module never rides along.
        assert!(!closure.contains("hooks-only"));
        assert!(graph.closure("utils").unwrap().is_empty());
    }

    #[test]
    fn deps_are_sorted_and_deduplicated() {
        let graph = ExportGraph::from_doc(doc(
            vec![
                module("z", &[]),
                module("a", &[]),
                module("top", &["z", "a", "z"]),
            ],
            vec![],
        ))
        .unwrap();
        assert_eq!(graph.module("top").unwrap().deps, vec!["a", "z"]);
    }
}
