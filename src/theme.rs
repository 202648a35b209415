//! Light/Dark Theme
//!
//! The preference lives in `localStorage` under [`THEME_STORAGE_KEY`] and is applied as a
//! `data-theme` attribute on `<html>`. Storage is best-effort: read and write failures are
//! logged and otherwise ignored.

use std::fmt;

pub const THEME_STORAGE_KEY: &str = "recipe-box-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallible string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or("no window")?
            .local_storage()
            .map_err(|_| "localStorage access denied".to_string())?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| format!("failed to read {}", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| format!("failed to write {}", key))
    }
}

/// Stored preference if readable and valid, else the OS preference
pub fn initial_theme(store: &impl KeyValueStore, prefers_dark: bool) -> Theme {
    let stored = match store.get(THEME_STORAGE_KEY) {
        Ok(value) => value.as_deref().and_then(Theme::parse),
        Err(e) => {
            log::warn!("[THEME] Could not read stored theme: {}", e);
            None
        }
    };
    stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub fn persist(store: &impl KeyValueStore, theme: Theme) {
    if let Err(e) = store.set(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("[THEME] Could not persist theme: {}", e);
    }
}

/// `prefers-color-scheme: dark`; false outside a browser
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

pub fn apply_to_document(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        if el.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("[THEME] Could not apply {} theme to document", theme);
        }
    }
}
