//! Application-level providers.

#[cfg(feature = "tooltip-provider")]
pub mod tooltip;

#[cfg(feature = "tooltip-provider")]
pub use tooltip::*;
