//! Cargo feature-table verification.
//!
//! The kit's Cargo features are the resolution contract for cargo consumers:
//! one feature per logical name, carrying exactly the module's declared
//! dependencies, plus `full` as the aggregated surface. The table is
//! hand-authored next to the code; this check pins it to the registry so the
//! two surfaces cannot drift apart.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use prism_registry::ExportGraph;
use serde::Deserialize;

use crate::error::BundleError;

#[derive(Debug, Deserialize)]
struct CargoManifest {
    #[serde(default)]
    features: BTreeMap<String, Vec<String>>,
}

/// Feature entries that do not name logical modules: optional-dependency
/// activations.
fn is_module_entry(entry: &str) -> bool {
    !entry.starts_with("dep:")
}

fn entry_set(entries: &[String]) -> BTreeSet<String> {
    entries
        .iter()
        .filter(|e| is_module_entry(e))
        .cloned()
        .collect()
}

/// Verify the package's `[features]` table against the export graph.
pub fn check_features(graph: &ExportGraph, package_root: &Path) -> Result<(), BundleError> {
    let manifest_path = package_root.join("Cargo.toml");
    let text = std::fs::read_to_string(&manifest_path)
        .map_err(|e| BundleError::io(&manifest_path, e))?;
    let manifest: CargoManifest = toml::from_str(&text)
        .map_err(|e| BundleError::Features(format!("unparseable {}: {e}", manifest_path.display())))?;
    let features = &manifest.features;

    let mut all_names = BTreeSet::new();

    for module in graph.modules() {
        all_names.insert(module.name.clone());
        let declared = features
            .get(&module.name)
            .ok_or_else(|| BundleError::Features(format!("missing feature `{}`", module.name)))?;
        let expected: BTreeSet<String> = module.deps.iter().cloned().collect();
        let got = entry_set(declared);
        if got != expected {
            return Err(BundleError::Features(format!(
                "feature `{}` enables {:?}, registry declares deps {:?}",
                module.name, got, expected
            )));
        }
    }

    for category in graph.categories() {
        all_names.insert(category.name.clone());
        let declared = features
            .get(&category.name)
            .ok_or_else(|| BundleError::Features(format!("missing feature `{}`", category.name)))?;
        let expected: BTreeSet<String> = category.members.iter().cloned().collect();
        let got = entry_set(declared);
        if got != expected {
            return Err(BundleError::Features(format!(
                "feature `{}` enables {:?}, registry declares members {:?}",
                category.name, got, expected
            )));
        }
    }

    let full = features
        .get("full")
        .ok_or_else(|| BundleError::Features("missing feature `full`".to_string()))?;
    let full_set = entry_set(full);
    if full_set != all_names {
        let missing: Vec<&String> = all_names.difference(&full_set).collect();
        let extra: Vec<&String> = full_set.difference(&all_names).collect();
        return Err(BundleError::Features(format!(
            "feature `full` drifted from the registry (missing {missing:?}, extra {extra:?})"
        )));
    }

    match features.get("default").map(Vec::as_slice) {
        Some([d]) if d == "full" => Ok(()),
        _ => Err(BundleError::Features(
            "feature `default` must be exactly [\"full\"]".to_string(),
        )),
    }
}
