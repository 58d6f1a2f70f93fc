//! Runtime behavior of the shared state primitives, rendered through a
//! server-side VirtualDom.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;

use prism_ui::contexts::sidebar::use_sidebar;
use prism_ui::theme::{
    use_theme, MemoryPrefs, PreferenceStore, SharedPrefs, ThemeMode, ThemeProvider,
    THEME_STORAGE_KEY,
};
use prism_ui::{SidebarCollapsible, Tooltip, TooltipContent, TooltipProvider, TooltipTrigger};

fn render_app(app: fn() -> Element) -> String {
    let mut vdom = VirtualDom::new(app);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

fn render_with<P: Properties + Clone + 'static>(
    app: fn(P) -> Element,
    props: P,
) -> String {
    let mut vdom = VirtualDom::new_with_props(app, props);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

// ── Theme ──────────────────────────────────────────────────────────────

/// Flips the shared theme to dark, once, while mounting.
#[component]
fn DarkSwitcher() -> Element {
    let mut theme = use_theme();
    use_hook(move || theme.set(ThemeMode::Dark));
    rsx! {}
}

/// Renders the mode it observes through its own context handle.
#[component]
fn ModeProbe() -> Element {
    let theme = use_theme();
    rsx! {
        span { "data-observed-mode": theme.mode().as_str() }
    }
}

#[component]
fn ThemeApp(store: SharedPrefs) -> Element {
    rsx! {
        ThemeProvider { store,
            // One consumer mutates, a sibling consumer observes: both hold
            // the same underlying state instance.
            DarkSwitcher {}
            ModeProbe {}
        }
    }
}

#[component]
fn ThemeReadApp(store: SharedPrefs) -> Element {
    rsx! {
        ThemeProvider { store,
            ModeProbe {}
        }
    }
}

#[test]
fn sibling_consumers_share_one_theme_instance() {
    let medium = MemoryPrefs::default();
    let html = render_with(
        ThemeApp,
        ThemeAppProps {
            store: SharedPrefs::new(medium.clone()),
        },
    );
    assert!(
        html.contains("data-observed-mode=\"dark\""),
        "probe did not observe the sibling's mutation: {html}"
    );

    // The setter also persisted the preference.
    assert_eq!(medium.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn theme_round_trips_through_a_fresh_initialization() {
    let medium = MemoryPrefs::default();

    // First application instance: user picks dark.
    render_with(
        ThemeApp,
        ThemeAppProps {
            store: SharedPrefs::new(medium.clone()),
        },
    );

    // Fresh VirtualDom, fresh provider, same durable medium.
    let html = render_with(
        ThemeReadApp,
        ThemeReadAppProps {
            store: SharedPrefs::new(medium),
        },
    );
    assert!(html.contains("data-observed-mode=\"dark\""));
}

#[test]
fn missing_preference_defaults_to_system() {
    let html = render_with(
        ThemeReadApp,
        ThemeReadAppProps {
            store: SharedPrefs::new(MemoryPrefs::default()),
        },
    );
    assert!(html.contains("data-observed-mode=\"system\""));
}

#[component]
fn ThemeStray() -> Element {
    let _ = use_theme();
    rsx! {}
}

#[test]
fn use_theme_outside_provider_fails_loudly() {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut vdom = VirtualDom::new(ThemeStray);
        vdom.rebuild_in_place();
    }));
    assert!(result.is_err());
}

// ── Sidebar ────────────────────────────────────────────────────────────

/// Collapses the sidebar through its own context handle while mounting.
#[component]
fn Collapser() -> Element {
    let mut sidebar = use_sidebar();
    use_hook(move || sidebar.set_open(false));
    rsx! {}
}

#[component]
fn SidebarProbe() -> Element {
    let sidebar = use_sidebar();
    rsx! {
        span { "data-observed-state": sidebar.state() }
    }
}

#[component]
fn SidebarApp() -> Element {
    rsx! {
        prism_ui::SidebarProvider { default_open: true, collapsible: SidebarCollapsible::Offcanvas,
            Collapser {}
            SidebarProbe {}
        }
    }
}

#[test]
fn sibling_consumers_share_one_sidebar_instance() {
    let html = render_app(SidebarApp);
    assert!(
        html.contains("data-observed-state=\"collapsed\""),
        "probe did not observe the sibling's toggle: {html}"
    );
}

#[component]
fn SidebarStray() -> Element {
    let _ = use_sidebar();
    rsx! {}
}

#[test]
fn sidebar_context_outside_provider_fails_loudly() {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut vdom = VirtualDom::new(SidebarStray);
        vdom.rebuild_in_place();
    }));
    assert!(result.is_err(), "stray sidebar read must panic, not default");
}

// ── Tooltip timing ─────────────────────────────────────────────────────

#[component]
fn ProvidedTooltip() -> Element {
    rsx! {
        TooltipProvider { delay_ms: 300,
            Tooltip {
                TooltipTrigger { "hover me" }
                TooltipContent { "hint" }
            }
        }
    }
}

#[component]
fn OverriddenTooltip() -> Element {
    rsx! {
        TooltipProvider { delay_ms: 300,
            Tooltip { delay_ms: 150,
                TooltipTrigger { "hover me" }
                TooltipContent { "hint" }
            }
        }
    }
}

#[component]
fn BareTooltip() -> Element {
    rsx! {
        Tooltip {
            TooltipTrigger { "hover me" }
            TooltipContent { "hint" }
        }
    }
}

#[test]
fn tooltip_inherits_the_provider_delay() {
    let html = render_app(ProvidedTooltip);
    assert!(html.contains("--prism-tooltip-delay: 300ms"), "{html}");
}

#[test]
fn tooltip_prop_wins_over_provider_delay() {
    let html = render_app(OverriddenTooltip);
    assert!(html.contains("--prism-tooltip-delay: 150ms"), "{html}");
    assert!(!html.contains("--prism-tooltip-delay: 300ms"));
}

#[test]
fn tooltip_without_provider_uses_the_documented_default() {
    let html = render_app(BareTooltip);
    assert!(html.contains("--prism-tooltip-delay: 0ms"), "{html}");
}
