//! Light/dark theme state with pluggable persistence.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
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

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Key-value persistence for the theme (browser `localStorage` in the app).
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self, key: &str) -> Option<String> {
        (key == THEME_KEY).then(|| self.value.borrow().clone()).flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if key == THEME_KEY {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }
}

/// The current theme and its store. [`ThemeState::toggle`] is the only way
/// to change it, and it persists every change.
pub struct ThemeState<S> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeState<S> {
    /// Loads the persisted theme; unknown or missing values fall back to the
    /// default.
    pub fn load(store: S) -> Self {
        let theme = store
            .read(THEME_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.write(THEME_KEY, self.theme.as_str());
        log::debug!("theme switched to {}", self.theme);
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
