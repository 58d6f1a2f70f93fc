//! Common icons, pre-sized for the rest of the kit.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCheck, LdChevronDown, LdChevronRight, LdInfo, LdMenu, LdSearch, LdX,
};
use dioxus_free_icons::Icon;

#[component]
pub fn MenuIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdMenu> { icon: LdMenu, width: size, height: size }
    }
}

#[component]
pub fn CloseIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdX> { icon: LdX, width: size, height: size }
    }
}

#[component]
pub fn CheckIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdCheck> { icon: LdCheck, width: size, height: size }
    }
}

#[component]
pub fn ChevronDownIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdChevronDown> { icon: LdChevronDown, width: size, height: size }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdChevronRight> { icon: LdChevronRight, width: size, height: size }
    }
}

#[component]
pub fn SearchIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdSearch> { icon: LdSearch, width: size, height: size }
    }
}

#[component]
pub fn InfoIcon(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        Icon::<LdInfo> { icon: LdInfo, width: size, height: size }
    }
}
