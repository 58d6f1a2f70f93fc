use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::separator::Separator;
use crate::contexts::sidebar::{use_sidebar, SidebarCollapsible, SidebarContext};
use crate::utils::flag;

/// Establishes the sidebar layout state for the tree below it.
///
/// Everything that reads or toggles the sidebar must live beneath exactly one
/// provider; see [`use_sidebar`] for the misuse contract.
#[component]
pub fn SidebarProvider(
    #[props(default = true)] default_open: bool,
    #[props(default)] collapsible: SidebarCollapsible,
    children: Element,
) -> Element {
    let open = use_signal(|| default_open);
    let ctx = use_context_provider(|| SidebarContext::new(open, collapsible));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "prism-sidebar-provider",
            "data-state": ctx.state(),
            "data-collapsible": ctx.collapsible.as_str(),
            {children}
        }
    }
}

/// The sidebar container itself.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut ctx = use_sidebar();
    let is_open = ctx.is_open();

    let base = vec![
        Attribute::new("class", "prism-sidebar", None, false),
        Attribute::new("data-state", ctx.state(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        // Backdrop for offcanvas mode; tapping it closes the sidebar.
        if is_open && ctx.collapsible == SidebarCollapsible::Offcanvas {
            div {
                class: "prism-sidebar-backdrop",
                onclick: move |_| ctx.set_open(false),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Header section inside the Sidebar.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable content area of the Sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Footer section inside the Sidebar.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// A group of related sidebar entries.
#[component]
pub fn SidebarGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-group", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Label for a SidebarGroup.
#[component]
pub fn SidebarGroupLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new(
        "class",
        "prism-sidebar-group-label",
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Navigation list inside the sidebar.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// A single entry in a SidebarMenu.
#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new(
        "class",
        "prism-sidebar-menu-item",
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Interactive entry button. In offcanvas mode, selecting an entry closes
/// the sidebar.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut ctx = use_sidebar();

    let base = vec![
        Attribute::new("class", "prism-sidebar-menu-button", None, false),
        Attribute::new("data-active", flag(active), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if ctx.collapsible == SidebarCollapsible::Offcanvas {
                    ctx.set_open(false);
                }
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Toggle button for the sidebar, usable anywhere under the provider.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut ctx = use_sidebar();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            onclick: move |_| ctx.toggle(),
            {children}
        }
    }
}

/// Dividing line inside the sidebar.
#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        Separator { class: "prism-sidebar-separator" }
    }
}

/// Main content area alongside the Sidebar; shifts with the sidebar state.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "prism-sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

/// Thin rail on the sidebar edge; clicking it toggles the sidebar.
#[component]
pub fn SidebarRail() -> Element {
    let mut ctx = use_sidebar();

    rsx! {
        button {
            class: "prism-sidebar-rail",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            tabindex: -1,
            onclick: move |_| ctx.toggle(),
        }
    }
}
