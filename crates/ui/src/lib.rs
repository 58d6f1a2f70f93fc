//! Prism: an all-in-one component kit for Dioxus.
//!
//! Every component, hook, context and provider is an independently
//! feature-gated module; the default `full` feature enables the whole kit.
//! Consumers that want a minimal dependency cone disable default features
//! and enable just the pieces they use — the feature graph mirrors
//! `registry.toml`, so enabling `sidebar` pulls in exactly the modules the
//! sidebar needs and nothing else.
//!
//! Cross-cutting state (theme, sidebar layout, tooltip timing) lives behind
//! providers mounted once per application root; components reach it through
//! context, so the same single state instance is observed no matter which
//! subset of the kit an application imports.

pub mod components;
pub mod contexts;
pub mod providers;
#[cfg(feature = "use-theme")]
pub mod theme;
#[cfg(feature = "utils")]
pub mod utils;

// Aggregated surface: everything re-exported flat, like the category and
// component entries combined.
pub use components::*;
#[cfg(feature = "sidebar-context")]
pub use contexts::sidebar::{use_sidebar, SidebarCollapsible, SidebarContext};
#[cfg(feature = "tooltip-provider")]
pub use providers::tooltip::{use_tooltip_config, TooltipConfig, TooltipProvider};
#[cfg(feature = "use-theme")]
pub use theme::{use_theme, SharedPrefs, ThemeMode, ThemeProvider, ThemeState};
