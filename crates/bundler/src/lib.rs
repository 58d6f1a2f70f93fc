//! Distribution pipeline for the Prism component kit.
//!
//! Consumes the validated [`ExportGraph`](prism_registry::ExportGraph) and
//! produces the distributable `dist/` tree in three passes run from one
//! invocation:
//!
//! 1. an aggregated bundle (`dist/full/`) carrying the whole library in one
//!    self-contained source tree,
//! 2. one independent bundle per logical module and per category aggregate
//!    (`dist/modules/<name>/`), each holding only its own sources and
//!    declaring cross-module dependencies as external references,
//! 3. a verbatim copy of every style asset (`dist/styles/`).
//!
//! All passes stage into a temporary directory and are swapped in atomically:
//! a failure in any single module aborts the whole run and leaves a previous
//! `dist/` untouched. Output is deterministic byte-for-byte for an unchanged
//! graph.

mod emit;
mod error;
mod features;
mod hash;
mod manifest;
mod pipeline;
mod resolve;

pub use emit::rust_module_path;
pub use error::BundleError;
pub use features::check_features;
pub use manifest::{DIST_MANIFEST, STYLES_DIR};
pub use pipeline::{BuildReport, Pipeline};
pub use resolve::validate_references;
