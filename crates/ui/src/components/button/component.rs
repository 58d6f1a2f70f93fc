use dioxus::prelude::*;

use crate::utils::cx;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "",
            ButtonVariant::Secondary => "prism-button-secondary",
            ButtonVariant::Destructive => "prism-button-destructive",
            ButtonVariant::Outline => "prism-button-outline",
            ButtonVariant::Ghost => "prism-button-ghost",
            ButtonVariant::Link => "prism-button-link",
        }
    }
}

/// Size presets for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    /// Square, for a single icon.
    Icon,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "",
            ButtonSize::Sm => "prism-button-sm",
            ButtonSize::Lg => "prism-button-lg",
            ButtonSize::Icon => "prism-button-icon",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A clickable button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = cx(["prism-button", props.variant.class(), props.size.class()]);
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
