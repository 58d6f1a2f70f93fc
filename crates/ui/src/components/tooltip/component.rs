use dioxus::prelude::*;
use dioxus_primitives::tooltip as prim;

pub use dioxus_primitives::{ContentAlign, ContentSide};

use crate::providers::tooltip::use_tooltip_config;

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    /// Delay before the tooltip shows, in milliseconds. Overrides the
    /// nearest `TooltipProvider`; without either, 0.
    #[props(default)]
    pub delay_ms: Option<u32>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Tooltip root. Wrap a [`TooltipTrigger`] and a [`TooltipContent`].
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let config = use_tooltip_config();
    let delay_ms = props.delay_ms.unwrap_or(config.delay_ms);

    let base = vec![
        Attribute::new("class", "prism-tooltip", None, false),
        Attribute::new(
            "style",
            format!("--prism-tooltip-delay: {delay_ms}ms;"),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tooltip {
            attributes: merged,
            {props.children}
        }
    }
}

#[component]
pub fn TooltipTrigger(mut props: prim::TooltipTriggerProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "prism-tooltip-trigger",
        None,
        false,
    ));

    rsx! {
        prim::TooltipTrigger { ..props }
    }
}

#[component]
pub fn TooltipContent(mut props: prim::TooltipContentProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "prism-tooltip-content",
        None,
        false,
    ));

    rsx! {
        prim::TooltipContent { ..props }
    }
}
