use dioxus::prelude::*;

/// Default delay before a tooltip appears, in milliseconds.
pub const DEFAULT_TOOLTIP_DELAY_MS: u32 = 0;

/// Tooltip timing configuration inherited by every tooltip in a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipConfig {
    pub delay_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            delay_ms: DEFAULT_TOOLTIP_DELAY_MS,
        }
    }
}

/// Configures tooltip timing for the tree below it.
///
/// A tooltip's own `delay_ms` prop always wins over the provider value;
/// without a provider, the documented default of 0 ms applies.
#[component]
pub fn TooltipProvider(
    #[props(default = DEFAULT_TOOLTIP_DELAY_MS)] delay_ms: u32,
    children: Element,
) -> Element {
    use_context_provider(|| TooltipConfig { delay_ms });

    rsx! {
        {children}
    }
}

/// The tooltip configuration in scope. Absence of a provider is not an
/// error; it resolves to the default config.
pub fn use_tooltip_config() -> TooltipConfig {
    try_consume_context::<TooltipConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_zero() {
        assert_eq!(TooltipConfig::default().delay_ms, 0);
    }
}
