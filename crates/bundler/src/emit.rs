//! Bundle artifact writers.
//!
//! Every writer is deterministic: inputs are iterated in sorted order and
//! emitted TOML has a fixed field order, so rebuilding an unchanged graph
//! reproduces the output byte for byte.

use std::path::{Path, PathBuf};

use prism_registry::{Category, ExportGraph, ExportSurface, LogicalModule};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::BundleError;
use crate::resolve::validate_module_references;

/// Per-bundle manifest, `bundle.toml`.
#[derive(Debug, Serialize)]
struct BundleManifest {
    name: String,
    kind: String,
    /// Whether internal module boundaries were inlined into this bundle.
    splitting: bool,
    /// Runtime entry inside the bundle.
    entry: String,
    /// Where the entry belongs in an assembled source tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    install_path: Option<String>,
    /// Other bundles this one resolves against at consumption time. Never
    /// copied in.
    deps: Vec<String>,
    /// Peer runtimes: required, never bundled.
    externals: Vec<String>,
    /// Style assets shipped with the bundle, install-relative.
    assets: Vec<String>,
}

/// Declaration artifact, `api.toml`: the public symbol set of the bundle's
/// runtime entry.
#[derive(Debug, Serialize)]
struct ApiManifest {
    exports: Vec<String>,
}

/// Rust module path a package-relative entry file maps to, e.g.
/// `src/components/button/component.rs` -> `crate::components::button`.
pub fn rust_module_path(entry: &Path) -> String {
    let mut segments: Vec<String> = entry
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.first().map(String::as_str) == Some("src") {
        segments.remove(0);
    }
    if segments.last().map(String::as_str) == Some("component") {
        segments.pop();
    }
    let mut path = String::from("crate");
    for segment in segments {
        path.push_str("::");
        path.push_str(&segment);
    }
    path
}

fn write_file(files: &mut Vec<PathBuf>, root: &Path, rel: &Path, data: &[u8]) -> Result<(), BundleError> {
    let target = root.join(rel);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BundleError::io(parent, e))?;
    }
    std::fs::write(&target, data).map_err(|e| BundleError::io(&target, e))?;
    files.push(rel.to_path_buf());
    Ok(())
}

fn copy_file(
    files: &mut Vec<PathBuf>,
    source: &Path,
    root: &Path,
    rel: &Path,
) -> Result<(), BundleError> {
    let data = std::fs::read(source).map_err(|e| BundleError::io(source, e))?;
    write_file(files, root, rel, &data)
}

fn to_toml<T: Serialize>(value: &T) -> String {
    // Serialization of these plain structs cannot fail.
    toml::to_string(value).unwrap_or_default()
}

fn surface_exports(surface: &ExportSurface) -> Vec<String> {
    surface.symbols.iter().cloned().collect()
}

/// Aggregated pass: the whole library as one self-contained tree.
///
/// Splitting is allowed here; the copied tree keeps the crate's own index as
/// its entry.
pub fn emit_full(
    graph: &ExportGraph,
    package_root: &Path,
    staging: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), BundleError> {
    let bundle_root = PathBuf::from("full");

    // Copy src/ wholesale, sorted for determinism.
    let src_root = package_root.join("src");
    let mut entries: Vec<PathBuf> = WalkDir::new(&src_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    entries.sort();
    for source in entries {
        let rel = source
            .strip_prefix(package_root)
            .map_err(|_| BundleError::module(&graph.package, "source escaped the package root"))?;
        copy_file(files, &source, staging, &bundle_root.join(rel))?;
    }

    if let Some(style) = &graph.style {
        copy_file(files, &package_root.join(style), staging, &bundle_root.join(style))?;
    }

    let mut surface = ExportSurface::default();
    for module in graph.modules() {
        let module_surface = graph
            .module_surface(package_root, module)
            .map_err(|e| BundleError::module(&module.name, e.to_string()))?;
        surface.extend(module_surface);
    }

    let manifest = BundleManifest {
        name: graph.package.clone(),
        kind: "full".to_string(),
        splitting: true,
        entry: "src/lib.rs".to_string(),
        install_path: None,
        deps: Vec::new(),
        externals: graph.peers.clone(),
        assets: graph
            .style
            .iter()
            .map(|s| s.display().to_string())
            .collect(),
    };
    write_file(files, staging, &bundle_root.join("bundle.toml"), to_toml(&manifest).as_bytes())?;
    let api = ApiManifest {
        exports: surface_exports(&surface),
    };
    write_file(files, staging, &bundle_root.join("api.toml"), to_toml(&api).as_bytes())?;
    Ok(())
}

/// Per-module pass for one logical module: its own entry and assets, nothing
/// else. Cross-module references stay references.
pub fn emit_module(
    graph: &ExportGraph,
    package_root: &Path,
    staging: &Path,
    module: &LogicalModule,
    files: &mut Vec<PathBuf>,
) -> Result<(), BundleError> {
    let bundle_root = PathBuf::from("modules").join(&module.name);

    let entry_source = package_root.join(&module.entry);
    let source = std::fs::read_to_string(&entry_source).map_err(|e| {
        BundleError::module(
            &module.name,
            format!("unreadable entry {}: {e}", entry_source.display()),
        )
    })?;

    validate_module_references(graph, module, &source)?;

    let surface = graph
        .module_surface(package_root, module)
        .map_err(|e| BundleError::module(&module.name, e.to_string()))?;
    if !surface.globs.is_empty() {
        return Err(BundleError::module(
            &module.name,
            format!(
                "entry re-exports `{}::*`; module entries must export by name",
                surface.globs[0]
            ),
        ));
    }

    let entry_file = module
        .entry
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .ok_or_else(|| BundleError::module(&module.name, "entry has no file name"))?;
    let entry_rel = PathBuf::from("src").join(&entry_file);
    write_file(files, staging, &bundle_root.join(&entry_rel), source.as_bytes())?;

    let mut asset_paths = Vec::new();
    for asset in &module.assets {
        let file_name = asset
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .ok_or_else(|| BundleError::module(&module.name, "asset has no file name"))?;
        copy_file(
            files,
            &package_root.join(asset),
            staging,
            &bundle_root.join("assets").join(&file_name),
        )?;
        asset_paths.push(asset.display().to_string());
    }
    asset_paths.sort();

    let manifest = BundleManifest {
        name: module.name.clone(),
        kind: module.kind.as_str().to_string(),
        splitting: false,
        entry: entry_rel.display().to_string(),
        install_path: Some(module.entry.display().to_string()),
        deps: module.deps.clone(),
        externals: graph.peers.clone(),
        assets: asset_paths,
    };
    write_file(files, staging, &bundle_root.join("bundle.toml"), to_toml(&manifest).as_bytes())?;
    let api = ApiManifest {
        exports: surface_exports(&surface),
    };
    write_file(files, staging, &bundle_root.join("api.toml"), to_toml(&api).as_bytes())?;
    Ok(())
}

/// Per-module pass for a category aggregate: a generated entry of named
/// re-exports covering exactly the member surfaces.
pub fn emit_category(
    graph: &ExportGraph,
    package_root: &Path,
    staging: &Path,
    category: &Category,
    files: &mut Vec<PathBuf>,
) -> Result<(), BundleError> {
    let bundle_root = PathBuf::from("modules").join(&category.name);

    let mut entry = String::new();
    entry.push_str(&format!("//! Aggregated `{}` surface.\n\n", category.name));
    let mut union = ExportSurface::default();
    for member in &category.members {
        let module = graph.module(member)?;
        let surface = graph
            .module_surface(package_root, module)
            .map_err(|e| BundleError::module(&category.name, e.to_string()))?;
        if !surface.globs.is_empty() {
            return Err(BundleError::module(
                &category.name,
                format!("member `{member}` has glob re-exports; aggregates need named surfaces"),
            ));
        }
        if surface.symbols.is_empty() {
            continue;
        }
        let names: Vec<&str> = surface.symbols.iter().map(String::as_str).collect();
        entry.push_str(&format!(
            "pub use {}::{{{}}};\n",
            rust_module_path(&module.entry),
            names.join(", ")
        ));
        union.extend(surface);
    }

    let entry_rel = PathBuf::from("src/mod.rs");
    write_file(files, staging, &bundle_root.join(&entry_rel), entry.as_bytes())?;

    let manifest = BundleManifest {
        name: category.name.clone(),
        kind: "category".to_string(),
        splitting: false,
        entry: entry_rel.display().to_string(),
        install_path: Some(format!("src/{}.rs", category.name.replace('-', "_"))),
        deps: category.members.clone(),
        externals: graph.peers.clone(),
        assets: Vec::new(),
    };
    write_file(files, staging, &bundle_root.join("bundle.toml"), to_toml(&manifest).as_bytes())?;
    let api = ApiManifest {
        exports: surface_exports(&union),
    };
    write_file(files, staging, &bundle_root.join("api.toml"), to_toml(&api).as_bytes())?;
    Ok(())
}

/// Style pass: assets copied byte-for-byte, never transformed.
pub fn emit_styles(
    graph: &ExportGraph,
    package_root: &Path,
    staging: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), BundleError> {
    let styles_root = PathBuf::from(crate::manifest::STYLES_DIR);

    if let Some(style) = &graph.style {
        let file_name = style
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .ok_or_else(|| BundleError::module(&graph.package, "style asset has no file name"))?;
        copy_file(
            files,
            &package_root.join(style),
            staging,
            &styles_root.join(file_name),
        )?;
    }

    for module in graph.modules() {
        for asset in &module.assets {
            let file_name = asset
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .ok_or_else(|| BundleError::module(&module.name, "asset has no file name"))?;
            copy_file(
                files,
                &package_root.join(asset),
                staging,
                &styles_root.join(&module.name).join(file_name),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn module_paths_follow_the_tree() {
        assert_eq!(
            rust_module_path(Path::new("src/components/button/component.rs")),
            "crate::components::button"
        );
        assert_eq!(rust_module_path(Path::new("src/theme.rs")), "crate::theme");
        assert_eq!(
            rust_module_path(Path::new("src/contexts/sidebar.rs")),
            "crate::contexts::sidebar"
        );
        assert_eq!(
            rust_module_path(Path::new("src/components/icons.rs")),
            "crate::components::icons"
        );
    }
}
