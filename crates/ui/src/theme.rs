use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Key under which the active theme is persisted in the preference store.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Theme modes the kit understands.
///
/// `System` defers to the host's color-scheme preference and is the default
/// when nothing has been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Storage and `data-theme` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse a persisted value. Anything unrecognized reads as a miss.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

/// A durable key-value store for user preferences.
///
/// The browser implementation is origin-scoped `localStorage`; tests inject
/// an in-memory store at composition time.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `localStorage`-backed store on wasm targets; inert elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrefs;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for BrowserPrefs {
    #[cfg(target_arch = "wasm32")]
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self, _key: &str, _value: &str) {}
}

/// In-memory store. Clones share the same underlying map, so a clone acts as
/// a fresh handle onto the same durable medium.
#[derive(Clone, Default)]
pub struct MemoryPrefs {
    values: Rc<std::cell::RefCell<BTreeMap<String, String>>>,
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Shared handle to a [`PreferenceStore`], cheap to clone into props.
#[derive(Clone)]
pub struct SharedPrefs(Rc<dyn PreferenceStore>);

impl SharedPrefs {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        SharedPrefs(Rc::new(store))
    }

    /// The browser-origin store used when no store is injected.
    pub fn browser() -> Self {
        SharedPrefs::new(BrowserPrefs)
    }

    pub fn load(&self, key: &str) -> Option<String> {
        self.0.load(key)
    }

    pub fn save(&self, key: &str, value: &str) {
        self.0.save(key, value)
    }
}

impl Default for SharedPrefs {
    fn default() -> Self {
        SharedPrefs::browser()
    }
}

impl PartialEq for SharedPrefs {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedPrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedPrefs")
    }
}

/// Shared theme state provided as context by [`ThemeProvider`].
///
/// One instance exists per application root; every consumer holds a handle to
/// the same signal, so a change made through any handle is observed by all.
#[derive(Clone)]
pub struct ThemeState {
    mode: Signal<ThemeMode>,
    store: SharedPrefs,
}

impl ThemeState {
    /// Current theme mode.
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Switch the theme. The only writer: updates the shared signal,
    /// persists the preference, and applies the document attribute.
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        self.store.save(THEME_STORAGE_KEY, mode.as_str());
        apply_document_theme(mode);
    }
}

/// Resolve the mode a provider starts with: the persisted preference, or
/// `System` when nothing (or garbage) is stored.
fn initial_mode(store: &SharedPrefs) -> ThemeMode {
    store
        .load(THEME_STORAGE_KEY)
        .as_deref()
        .and_then(ThemeMode::parse)
        .unwrap_or_default()
}

/// Apply the mode to the document root as a `data-theme` attribute.
fn apply_document_theme(mode: ThemeMode) {
    document::eval(&format!(
        r#"document.documentElement.setAttribute('data-theme', '{}');"#,
        mode.as_str()
    ));
}

#[derive(Props, Clone, PartialEq)]
pub struct ThemeProviderProps {
    /// Preference store read on initialization and written on every change.
    #[props(default)]
    pub store: SharedPrefs,
    pub children: Element,
}

/// Establishes the theme state for the tree below it.
///
/// Mount exactly one per application root. Components anywhere beneath it
/// share a single [`ThemeState`] through [`use_theme`], no matter which
/// entry point they were imported from.
#[component]
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let store = props.store.clone();
    let mode = use_signal(move || initial_mode(&store));

    use_context_provider(|| ThemeState {
        mode,
        store: props.store.clone(),
    });

    use_effect(move || {
        apply_document_theme(*mode.read());
    });

    rsx! {
        {props.children}
    }
}

/// Access the shared theme state.
///
/// Calling this outside a [`ThemeProvider`] is a programming error and
/// panics immediately rather than handing back a disconnected default.
pub fn use_theme() -> ThemeState {
    try_consume_context::<ThemeState>().expect("use_theme must be called within a ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_default_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn theme_mode_as_str_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn unknown_persisted_value_reads_as_miss() {
        assert_eq!(ThemeMode::parse("solarized"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn read_miss_resolves_to_system() {
        let store = SharedPrefs::new(MemoryPrefs::default());
        assert_eq!(initial_mode(&store), ThemeMode::System);
    }

    #[test]
    fn persisted_preference_survives_reinitialization() {
        let medium = MemoryPrefs::default();

        let store = SharedPrefs::new(medium.clone());
        store.save(THEME_STORAGE_KEY, ThemeMode::Dark.as_str());

        // A fresh handle onto the same medium, as after a reload.
        let reopened = SharedPrefs::new(medium);
        assert_eq!(initial_mode(&reopened), ThemeMode::Dark);
    }

    #[test]
    fn corrupted_preference_falls_back_to_system() {
        let medium = MemoryPrefs::default();
        medium.save(THEME_STORAGE_KEY, "neon");
        assert_eq!(initial_mode(&SharedPrefs::new(medium)), ThemeMode::System);
    }
}
