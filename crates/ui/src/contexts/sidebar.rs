use dioxus::prelude::*;

/// How a closed sidebar behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarCollapsible {
    /// Slides fully out of view.
    #[default]
    Offcanvas,
    /// Collapses to an icon rail.
    Icon,
    /// Always fully visible.
    None,
}

impl SidebarCollapsible {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarCollapsible::Offcanvas => "offcanvas",
            SidebarCollapsible::Icon => "icon",
            SidebarCollapsible::None => "none",
        }
    }
}

/// Shared sidebar layout state, established once by `SidebarProvider` and
/// read anywhere beneath it without prop-threading.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarContext {
    open: Signal<bool>,
    pub collapsible: SidebarCollapsible,
}

impl SidebarContext {
    pub fn new(open: Signal<bool>, collapsible: SidebarCollapsible) -> Self {
        SidebarContext { open, collapsible }
    }

    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn set_open(&mut self, open: bool) {
        self.open.set(open);
    }

    pub fn toggle(&mut self) {
        let next = !self.is_open();
        self.open.set(next);
    }

    /// `"expanded"` / `"collapsed"`, for `data-state` attributes.
    pub fn state(&self) -> &'static str {
        if self.is_open() {
            "expanded"
        } else {
            "collapsed"
        }
    }
}

/// Access the sidebar state established by the nearest `SidebarProvider`.
///
/// Reading this context outside a provider is a programming error; it panics
/// at the point of use instead of silently defaulting, so a misplaced
/// component is caught the first time it renders.
pub fn use_sidebar() -> SidebarContext {
    try_consume_context::<SidebarContext>()
        .expect("use_sidebar must be called within a SidebarProvider")
}
