use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::tooltip::{Tooltip, TooltipContent, TooltipTrigger};

/// A [`Button`] with an attached tooltip, for icon-only actions that still
/// need a textual hint.
#[component]
pub fn TooltipButton(
    /// Tooltip text.
    tooltip: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    /// Tooltip delay override, forwarded to [`Tooltip`].
    #[props(default)]
    delay_ms: Option<u32>,
    children: Element,
) -> Element {
    rsx! {
        Tooltip { delay_ms,
            TooltipTrigger {
                Button {
                    variant,
                    size,
                    disabled,
                    onclick: move |evt| {
                        if let Some(handler) = &onclick {
                            handler.call(evt);
                        }
                    },
                    {children}
                }
            }
            TooltipContent { "{tooltip}" }
        }
    }
}
