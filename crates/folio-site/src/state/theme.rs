//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use crate::storage::SharedStore;

/// Display mode of the whole site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Returns the CSS `data-theme` attribute value, also the stored value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Label for the toggle button, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "Switch to light theme",
            ThemePreference::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(format!("unknown theme: {other:?}")),
        }
    }
}

/// Owns the current theme and writes every change through to storage.
///
/// Built once at startup and passed to components through context.
#[derive(Clone)]
pub struct ThemeController {
    current: ThemePreference,
    store: SharedStore,
    key: String,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ThemeController {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.key == other.key
    }
}

impl ThemeController {
    /// Reads the stored preference once, falling back to the default when
    /// it is missing or unrecognised.
    pub fn load(store: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.load(&key) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("Ignoring stored theme: {}", e);
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        tracing::debug!("Initial theme: {}", current);

        Self { current, store, key }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flips the theme, persists it and returns the new value.
    ///
    /// A failed write only means the choice will not survive a reload.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        if let Err(e) = self.store.save(&self.key, self.current.css_value()) {
            tracing::warn!("Theme preference not persisted: {}", e);
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::storage::{MemoryStore, PreferenceStore, UnavailableStore};

    #[test]
    fn test_defaults_to_dark_without_stored_value() {
        let controller = ThemeController::load(Rc::new(MemoryStore::new()), "theme");
        assert_eq!(controller.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_reads_stored_value() {
        let store = Rc::new(MemoryStore::new());
        store.save("theme", "light").unwrap();
        let controller = ThemeController::load(store, "theme");
        assert_eq!(controller.current(), ThemePreference::Light);
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        let store = Rc::new(MemoryStore::new());
        store.save("theme", "sepia").unwrap();
        let controller = ThemeController::load(store, "theme");
        assert_eq!(controller.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists() {
        let store = Rc::new(MemoryStore::new());
        let mut controller = ThemeController::load(store.clone(), "theme");
        let original = controller.current();

        let first = controller.toggle();
        assert_ne!(first, original);
        assert_eq!(store.load("theme").as_deref(), Some(first.css_value()));

        let second = controller.toggle();
        assert_eq!(second, original);
        assert_eq!(controller.current(), original);
        assert_eq!(store.load("theme").as_deref(), Some(second.css_value()));
    }

    #[test]
    fn test_toggle_without_storage_still_switches() {
        let mut controller = ThemeController::load(Rc::new(UnavailableStore), "theme");
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.current(), ThemePreference::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(" light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
