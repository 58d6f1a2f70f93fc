//! Export graph for the Prism component kit.
//!
//! The registry manifest (`registry.toml`) is the single source of truth for
//! what the library publishes: every logical module (component, hook, context,
//! provider, utility), its entry source file, its direct dependencies on other
//! modules, and the category aggregates that re-export groups of modules under
//! one name. This crate parses and validates that manifest into an
//! [`ExportGraph`] that the bundler consumes.
//!
//! Validation is strict and happens before any artifact is written: duplicate
//! names, dangling category members, unknown dependencies, dependency cycles,
//! and entry paths escaping the package root are all fatal configuration
//! errors.

mod alias;
mod error;
mod graph;
mod schema;
mod surface;

pub use alias::resolve_entry;
pub use error::RegistryError;
pub use graph::{Category, ExportGraph, LogicalModule};
pub use schema::{CategoryEntry, ModuleEntry, ModuleKind, PackageSection, RegistryDoc};
pub use surface::{scan_source, ExportSurface};

/// File name of the registry manifest, relative to the package root.
pub const REGISTRY_FILE: &str = "registry.toml";
