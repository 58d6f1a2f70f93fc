use dioxus::prelude::*;
use dioxus_primitives::aspect_ratio as prim;

/// Constrains children to a fixed width/height ratio.
#[component]
pub fn AspectRatio(mut props: prim::AspectRatioProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "prism-aspect-ratio", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AspectRatio { ..props }
    }
}
