use dioxus::prelude::*;
use dioxus_primitives::accordion as prim;

/// Vertically stacked disclosure sections.
#[component]
pub fn Accordion(mut props: prim::AccordionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "prism-accordion", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Accordion { ..props }
    }
}

#[component]
pub fn AccordionItem(mut props: prim::AccordionItemProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "prism-accordion-item", None, false));

    rsx! {
        prim::AccordionItem { ..props }
    }
}

/// Trigger row. A chevron is appended after the caller's children and
/// rotates via CSS when the item opens.
#[component]
pub fn AccordionTrigger(mut props: prim::AccordionTriggerProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "prism-accordion-trigger",
        None,
        false,
    ));

    let label = props.children;
    props.children = rsx! {
        {label}
        svg {
            class: "prism-accordion-chevron",
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M6 9l6 6 6-6" }
        }
    };

    rsx! {
        prim::AccordionTrigger { ..props }
    }
}

#[component]
pub fn AccordionContent(mut props: prim::AccordionContentProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "prism-accordion-content",
        None,
        false,
    ));

    rsx! {
        prim::AccordionContent { ..props }
    }
}
