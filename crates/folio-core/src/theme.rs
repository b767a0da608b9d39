use crate::constants::{THEME_DARK_VALUE, THEME_LIGHT_VALUE, THEME_STORAGE_KEY};
use crate::error::Result;
use crate::store::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Only the exact light value selects the light variant; anything else,
    /// including a missing key, falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(THEME_LIGHT_VALUE) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Theme::Dark => THEME_DARK_VALUE,
            Theme::Light => THEME_LIGHT_VALUE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

/// Holds the active theme and mirrors every change into a [`PreferenceStore`].
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the persisted preference once. An unreadable store behaves like
    /// an empty one.
    pub fn load(store: S) -> Self {
        let stored = match store.get(THEME_STORAGE_KEY) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[theme] read failed: {e}");
                None
            }
        };
        let current = Theme::from_stored(stored.as_deref());
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. The in-memory theme changes even when
    /// the write fails; the error is returned so the caller can report it.
    pub fn toggle(&mut self) -> (Theme, Result<()>) {
        self.current = self.current.toggled();
        let written = self
            .store
            .set(THEME_STORAGE_KEY, self.current.stored_value());
        (self.current, written)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
