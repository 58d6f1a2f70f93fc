//! `registry.toml` schema.
//!
//! The manifest is deserialized verbatim into these types; all cross-entry
//! validation (name uniqueness, dangling references, cycles) happens when the
//! document is turned into an [`ExportGraph`](crate::ExportGraph).

use serde::Deserialize;

/// The whole registry manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryDoc {
    pub package: PackageSection,

    /// Logical modules, one `[[module]]` table each.
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleEntry>,

    /// Category aggregates, one `[[category]]` table each.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

/// The `[package]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageSection {
    /// Published package name.
    pub name: String,

    /// The package-level stylesheet, copied verbatim into the distributable.
    #[serde(default)]
    pub style: Option<String>,

    /// Peer runtimes: declared for consumers, never bundled.
    #[serde(default)]
    pub peers: Vec<String>,
}

/// What kind of export a logical module is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Component,
    Hook,
    Context,
    Provider,
    Util,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Component => "component",
            ModuleKind::Hook => "hook",
            ModuleKind::Context => "context",
            ModuleKind::Provider => "provider",
            ModuleKind::Util => "util",
        }
    }
}

/// One `[[module]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleEntry {
    /// Unique logical name (kebab-case by convention).
    pub name: String,

    pub kind: ModuleKind,

    /// Entry source file. `@/` denotes the package `src/` root.
    pub path: String,

    /// Direct dependencies on other logical modules, by name.
    #[serde(default)]
    pub deps: Vec<String>,

    /// Style assets shipped alongside the module, copied untransformed.
    #[serde(default)]
    pub assets: Vec<String>,
}

/// One `[[category]]` entry: a named aggregate re-exporting its members.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub members: Vec<String>,
}
