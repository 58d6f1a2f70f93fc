//! The dist-level manifest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use prism_registry::ExportGraph;
use serde::Serialize;

use crate::error::BundleError;
use crate::hash::{sha256_file, Fingerprint};

/// File name of the dist-level manifest.
pub const DIST_MANIFEST: &str = "MANIFEST.toml";

/// Directory under dist holding the verbatim style assets.
pub const STYLES_DIR: &str = "styles";

#[derive(Debug, Serialize)]
struct DistManifest {
    package: String,
    /// Fingerprint of the export graph the artifacts were generated from.
    fingerprint: String,
    /// Relative path -> sha256 of every emitted file, sorted.
    files: BTreeMap<String, String>,
}

/// Stable fingerprint over everything the build depends on from the graph.
pub fn graph_fingerprint(graph: &ExportGraph) -> String {
    let mut fp = Fingerprint::new();
    fp.update(&graph.package);
    for peer in &graph.peers {
        fp.update(peer);
    }
    if let Some(style) = &graph.style {
        fp.update(&style.display().to_string());
    }
    for module in graph.modules() {
        fp.update(&module.name);
        fp.update(module.kind.as_str());
        fp.update(&module.entry.display().to_string());
        for dep in &module.deps {
            fp.update(dep);
        }
        for asset in &module.assets {
            fp.update(&asset.display().to_string());
        }
    }
    for category in graph.categories() {
        fp.update(&category.name);
        for member in &category.members {
            fp.update(member);
        }
    }
    fp.finish()
}

/// Hash every emitted file and write `MANIFEST.toml` into the staging root.
pub fn write_manifest(
    graph: &ExportGraph,
    staging: &Path,
    emitted: &[PathBuf],
) -> Result<(), BundleError> {
    let mut files = BTreeMap::new();
    for rel in emitted {
        let digest = sha256_file(&staging.join(rel))?;
        // Forward slashes regardless of host so the manifest is portable.
        let key = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(key, digest);
    }

    let manifest = DistManifest {
        package: graph.package.clone(),
        fingerprint: graph_fingerprint(graph),
        files,
    };
    let text = toml::to_string(&manifest).unwrap_or_default();
    std::fs::write(staging.join(DIST_MANIFEST), text)
        .map_err(|e| BundleError::io(staging.join(DIST_MANIFEST), e))
}
