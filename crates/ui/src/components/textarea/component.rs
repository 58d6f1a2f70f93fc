use dioxus::prelude::*;

/// A multi-line text input.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: i64,
    #[props(default = false)] disabled: bool,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "prism-textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            value: value,
            placeholder: placeholder,
            rows: rows,
            disabled: disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            ..merged,
        }
    }
}
