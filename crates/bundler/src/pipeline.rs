//! The pipeline runner.

use std::path::{Path, PathBuf};

use prism_registry::ExportGraph;

use crate::emit::{emit_category, emit_full, emit_module, emit_styles};
use crate::error::BundleError;
use crate::manifest::{graph_fingerprint, write_manifest};

/// One pipeline invocation: aggregated pass, per-module pass and style pass,
/// all generated from the same export graph.
pub struct Pipeline<'a> {
    graph: &'a ExportGraph,
    package_root: &'a Path,
    out_dir: &'a Path,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Emitted files, relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Export-graph fingerprint recorded in the manifest.
    pub fingerprint: String,
}

impl<'a> Pipeline<'a> {
    pub fn new(graph: &'a ExportGraph, package_root: &'a Path, out_dir: &'a Path) -> Self {
        Pipeline {
            graph,
            package_root,
            out_dir,
        }
    }

    /// Run every pass.
    ///
    /// All output is staged in a temporary sibling of the output directory
    /// and swapped in only after the last pass succeeded, so a failure in
    /// any single module leaves an existing `dist/` untouched and never
    /// yields a partial artifact set.
    pub fn run(&self) -> Result<BuildReport, BundleError> {
        let parent = match self.out_dir.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| BundleError::io(parent, e))?;

        let staging = tempfile::Builder::new()
            .prefix(".prism-dist-")
            .tempdir_in(parent)
            .map_err(|e| BundleError::io(parent, e))?;

        let mut files = Vec::new();

        tracing::info!(package = %self.graph.package, "aggregated pass");
        emit_full(self.graph, self.package_root, staging.path(), &mut files)?;

        for module in self.graph.modules() {
            tracing::debug!(module = %module.name, "per-module pass");
            emit_module(self.graph, self.package_root, staging.path(), module, &mut files)?;
        }
        for category in self.graph.categories() {
            tracing::debug!(category = %category.name, "category pass");
            emit_category(self.graph, self.package_root, staging.path(), category, &mut files)?;
        }

        tracing::info!("style pass");
        emit_styles(self.graph, self.package_root, staging.path(), &mut files)?;

        files.sort();
        write_manifest(self.graph, staging.path(), &files)?;

        // Swap the finished tree in.
        if self.out_dir.exists() {
            std::fs::remove_dir_all(self.out_dir).map_err(|e| BundleError::io(self.out_dir, e))?;
        }
        let staged = staging.into_path();
        std::fs::rename(&staged, self.out_dir).map_err(|e| BundleError::io(self.out_dir, e))?;

        tracing::info!(
            files = files.len(),
            out = %self.out_dir.display(),
            "pipeline complete"
        );
        Ok(BuildReport {
            files,
            fingerprint: graph_fingerprint(self.graph),
        })
    }
}
