//! Pins the shipped export graph to the code and feature table it describes.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use prism_bundler::check_features;
use prism_registry::{ExportGraph, REGISTRY_FILE};

fn ui_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../ui")
}

fn graph() -> ExportGraph {
    ExportGraph::load(&ui_root().join(REGISTRY_FILE)).expect("shipped registry must validate")
}

#[test]
fn every_registered_entry_exists_on_disk() {
    let root = ui_root();
    let graph = graph();
    for module in graph.modules() {
        assert!(
            root.join(&module.entry).is_file(),
            "entry missing for `{}`: {}",
            module.name,
            module.entry.display()
        );
        for asset in &module.assets {
            assert!(
                root.join(asset).is_file(),
                "asset missing for `{}`: {}",
                module.name,
                asset.display()
            );
        }
    }
}

#[test]
fn feature_table_matches_the_registry() {
    check_features(&graph(), &ui_root()).expect("features must mirror the export graph");
}

#[test]
fn cross_module_references_are_all_declared() {
    prism_bundler::validate_references(&graph(), &ui_root())
        .expect("sources must only reach declared dependencies");
}

#[test]
fn button_pulls_exactly_its_own_dependency_cone() {
    let graph = graph();
    let closure = graph.closure("button").unwrap();
    let expected: BTreeSet<String> = ["utils"].into_iter().map(String::from).collect();
    assert_eq!(closure, expected);

    // In particular, a button-only consumer never drags the hooks in.
    assert!(!closure.contains("use-theme"));
}

#[test]
fn composite_modules_close_over_their_parts() {
    let graph = graph();
    let closure = graph.closure("tooltip-button").unwrap();
    for dep in ["button", "tooltip", "tooltip-provider", "utils"] {
        assert!(closure.contains(dep), "missing `{dep}` in closure");
    }

    let sidebar = graph.closure("sidebar").unwrap();
    for dep in ["button", "separator", "sidebar-context", "utils"] {
        assert!(sidebar.contains(dep), "missing `{dep}` in sidebar closure");
    }
}

#[test]
fn shared_state_modules_surface_their_contracts() {
    let root = ui_root();
    let graph = graph();

    let theme = graph.module("use-theme").unwrap();
    let surface = graph.module_surface(&root, theme).unwrap();
    for symbol in ["ThemeMode", "ThemeProvider", "ThemeState", "use_theme"] {
        assert!(surface.symbols.contains(symbol), "theme lost `{symbol}`");
    }

    let sidebar = graph.module("sidebar-context").unwrap();
    let surface = graph.module_surface(&root, sidebar).unwrap();
    assert!(surface.symbols.contains("use_sidebar"));
    assert!(surface.symbols.contains("SidebarContext"));

    let tooltip = graph.module("tooltip-provider").unwrap();
    let surface = graph.module_surface(&root, tooltip).unwrap();
    assert!(surface.symbols.contains("TooltipProvider"));
    assert!(surface.symbols.contains("TooltipConfig"));
}

#[test]
fn categories_cover_the_shared_state_primitives() {
    let graph = graph();
    let hooks = graph.category("hooks").expect("hooks aggregate");
    assert_eq!(hooks.members, vec!["use-theme"]);
    let contexts = graph.category("contexts").expect("contexts aggregate");
    assert_eq!(contexts.members, vec!["sidebar-context"]);
    let providers = graph.category("providers").expect("providers aggregate");
    assert_eq!(providers.members, vec!["tooltip-provider"]);
}

#[test]
fn peers_are_declared_and_never_registered_as_modules() {
    let graph = graph();
    assert_eq!(graph.peers, vec!["dioxus", "dioxus-primitives"]);
    for peer in &graph.peers {
        assert!(graph.module(peer).is_err(), "`{peer}` must stay external");
    }
}
