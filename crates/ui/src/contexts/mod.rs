//! Tree-scoped contexts shared across components.

#[cfg(feature = "sidebar-context")]
pub mod sidebar;

#[cfg(feature = "sidebar-context")]
pub use sidebar::*;
