//! Export-surface extraction.
//!
//! Bundles ship a declaration artifact listing their public symbols; that
//! list is derived from the same source file the runtime entry is produced
//! from, so the two surfaces cannot drift. Extraction is a line-oriented scan
//! of `pub` items, which is sufficient for the flat entry files the registry
//! points at. Macro-generated items are out of scope.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// The public symbols of one source entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSurface {
    /// Named public symbols, sorted.
    pub symbols: BTreeSet<String>,
    /// Targets of `pub use path::*` re-exports, in source order.
    ///
    /// Globs cannot be resolved to names without chasing the target module,
    /// so they are surfaced for the caller to accept or reject.
    pub globs: Vec<String>,
}

impl ExportSurface {
    pub fn extend(&mut self, other: ExportSurface) {
        self.symbols.extend(other.symbols);
        self.globs.extend(other.globs);
    }
}

fn item_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)^\s*pub\s+(?:async\s+)?(?:unsafe\s+)?(?:fn|struct|enum|trait|type|const|static)\s+([A-Za-z_][A-Za-z0-9_]*)",
        )
        .expect("static pattern compiles")
    })
}

fn use_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*pub\s+use\s+([^;]+);").expect("static pattern compiles")
    })
}

/// Scan a source file for its public symbols.
pub fn scan_source(source: &str) -> ExportSurface {
    let mut surface = ExportSurface::default();

    for capture in item_pattern().captures_iter(source) {
        surface.symbols.insert(capture[1].to_string());
    }

    for capture in use_pattern().captures_iter(source) {
        collect_use_tree(capture[1].trim(), &mut surface);
    }

    surface
}

/// Collect the names introduced by one `pub use` tree.
///
/// Handles `path::Name`, `path::Name as Alias`, `path::{A, B as C}` and
/// `path::*`. Nested braces do not occur in the entry files the registry
/// accepts.
fn collect_use_tree(tree: &str, surface: &mut ExportSurface) {
    let tree = tree.trim();

    if let Some(prefix) = tree.strip_suffix("::*") {
        surface.globs.push(prefix.trim().to_string());
        return;
    }

    if let Some(open) = tree.find('{') {
        let prefix = tree[..open].trim_end_matches("::").trim();
        let inner = tree[open + 1..].trim_end_matches('}');
        for part in inner.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if part == "*" {
                surface.globs.push(prefix.to_string());
                continue;
            }
            surface.symbols.insert(leaf_name(part).to_string());
        }
        return;
    }

    surface.symbols.insert(leaf_name(tree).to_string());
}

/// The name a use-tree leaf binds: the alias after `as`, else the last path
/// segment.
fn leaf_name(leaf: &str) -> &str {
    let leaf = leaf.trim();
    if let Some((_, alias)) = leaf.rsplit_once(" as ") {
        return alias.trim();
    }
    leaf.rsplit("::").next().unwrap_or(leaf).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbols(surface: &ExportSurface) -> Vec<&str> {
        surface.symbols.iter().map(String::as_str).collect()
    }

    #[test]
    fn items_are_extracted() {
        let surface = scan_source(
            r#"
pub fn use_theme() -> ThemeState { todo!() }

pub struct ThemeState;

pub enum ThemeMode { Light, Dark }

pub const THEME_STORAGE_KEY: &str = "theme";

fn private_helper() {}
struct PrivateState;
"#,
        );
        assert_eq!(
            symbols(&surface),
            vec!["THEME_STORAGE_KEY", "ThemeMode", "ThemeState", "use_theme"]
        );
        assert!(surface.globs.is_empty());
    }

    #[test]
    fn named_reexports_are_extracted() {
        let surface = scan_source(
            "pub use dioxus_primitives::{ContentAlign, ContentSide};\n\
             pub use prim::CheckboxState;\n\
             pub use crate::theme::ThemeMode as Mode;\n",
        );
        assert_eq!(
            symbols(&surface),
            vec!["CheckboxState", "ContentAlign", "ContentSide", "Mode"]
        );
    }

    #[test]
    fn glob_reexports_are_reported_not_expanded() {
        let surface = scan_source("pub use crate::components::button::*;\n");
        assert!(surface.symbols.is_empty());
        assert_eq!(surface.globs, vec!["crate::components::button"]);
    }

    #[test]
    fn comments_and_non_pub_lines_are_ignored() {
        let surface = scan_source(
            "// pub fn commented_out() {}\n\
             use std::fmt;\n\
             pub(crate) fn crate_only() {}\n",
        );
        assert!(surface.symbols.is_empty());
    }
}
