// Plain-markup components
#[cfg(feature = "alert")]
pub mod alert;
#[cfg(feature = "badge")]
pub mod badge;
#[cfg(feature = "button")]
pub mod button;
#[cfg(feature = "card")]
pub mod card;
#[cfg(feature = "input")]
pub mod input;
#[cfg(feature = "sheet")]
pub mod sheet;
#[cfg(feature = "skeleton")]
pub mod skeleton;
#[cfg(feature = "table")]
pub mod table;
#[cfg(feature = "textarea")]
pub mod textarea;

// Wrappers over dioxus-primitives
#[cfg(feature = "accordion")]
pub mod accordion;
#[cfg(feature = "alert-dialog")]
pub mod alert_dialog;
#[cfg(feature = "aspect-ratio")]
pub mod aspect_ratio;
#[cfg(feature = "avatar")]
pub mod avatar;
#[cfg(feature = "checkbox")]
pub mod checkbox;
#[cfg(feature = "collapsible")]
pub mod collapsible;
#[cfg(feature = "dialog")]
pub mod dialog;
#[cfg(feature = "dropdown-menu")]
pub mod dropdown_menu;
#[cfg(feature = "hover-card")]
pub mod hover_card;
#[cfg(feature = "label")]
pub mod label;
#[cfg(feature = "popover")]
pub mod popover;
#[cfg(feature = "progress")]
pub mod progress;
#[cfg(feature = "scroll-area")]
pub mod scroll_area;
#[cfg(feature = "separator")]
pub mod separator;
#[cfg(feature = "switch")]
pub mod switch;
#[cfg(feature = "tabs")]
pub mod tabs;
#[cfg(feature = "toggle")]
pub mod toggle;
#[cfg(feature = "toggle-group")]
pub mod toggle_group;
#[cfg(feature = "tooltip")]
pub mod tooltip;

// Composites and extras
#[cfg(feature = "icons")]
pub mod icons;
#[cfg(feature = "tooltip-button")]
pub mod tooltip_button;

// Depends on button, separator and the sidebar context
#[cfg(feature = "sidebar")]
pub mod sidebar;

// Re-exports for the aggregated surface
#[cfg(feature = "accordion")]
pub use accordion::*;
#[cfg(feature = "alert")]
pub use alert::*;
#[cfg(feature = "alert-dialog")]
pub use alert_dialog::*;
#[cfg(feature = "aspect-ratio")]
pub use aspect_ratio::*;
#[cfg(feature = "avatar")]
pub use avatar::*;
#[cfg(feature = "badge")]
pub use badge::*;
#[cfg(feature = "button")]
pub use button::*;
#[cfg(feature = "card")]
pub use card::*;
#[cfg(feature = "checkbox")]
pub use checkbox::*;
#[cfg(feature = "collapsible")]
pub use collapsible::*;
#[cfg(feature = "dialog")]
pub use dialog::*;
#[cfg(feature = "dropdown-menu")]
pub use dropdown_menu::*;
#[cfg(feature = "hover-card")]
pub use hover_card::*;
#[cfg(feature = "icons")]
pub use icons::*;
#[cfg(feature = "input")]
pub use input::*;
#[cfg(feature = "label")]
pub use label::*;
#[cfg(feature = "popover")]
pub use popover::*;
#[cfg(feature = "progress")]
pub use progress::*;
#[cfg(feature = "scroll-area")]
pub use scroll_area::*;
#[cfg(feature = "separator")]
pub use separator::*;
#[cfg(feature = "sheet")]
pub use sheet::*;
#[cfg(feature = "sidebar")]
pub use sidebar::*;
#[cfg(feature = "skeleton")]
pub use skeleton::*;
#[cfg(feature = "switch")]
pub use switch::*;
#[cfg(feature = "table")]
pub use table::*;
#[cfg(feature = "tabs")]
pub use tabs::*;
#[cfg(feature = "textarea")]
pub use textarea::*;
#[cfg(feature = "toggle")]
pub use toggle::*;
#[cfg(feature = "toggle-group")]
pub use toggle_group::*;
#[cfg(feature = "tooltip")]
pub use tooltip::*;
#[cfg(feature = "tooltip-button")]
pub use tooltip_button::*;
