use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// An on/off toggle switch.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "prism-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "prism-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}
