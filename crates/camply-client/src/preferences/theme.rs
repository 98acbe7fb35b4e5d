//! Light/dark theme preference.

use std::fmt;

use super::{PreferenceError, PreferenceStore};

/// Storage key holding the chosen theme.
pub const THEME_STORAGE_KEY: &str = "camply-ui-theme";

/// Colour scheme applied to the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds.
    Dark,
}

impl Theme {
    /// Stored label and root class name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored label; anything else is treated as unset.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme choice backed by a [`PreferenceStore`].
///
/// A stored choice wins; without one the system preference applies.
///
/// # Examples
/// ```
/// use camply_client::preferences::{MemoryPreferenceStore, Theme, ThemePreferences};
///
/// let store = MemoryPreferenceStore::new();
/// let mut themes = ThemePreferences::load(&store, Theme::Dark).expect("load");
/// assert_eq!(themes.current(), Theme::Dark);
/// assert_eq!(themes.toggle().expect("toggle"), Theme::Light);
///
/// let reloaded = ThemePreferences::load(&store, Theme::Dark).expect("reload");
/// assert_eq!(reloaded.current(), Theme::Light);
/// ```
pub struct ThemePreferences<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemePreferences<S> {
    /// Resolve the active theme from `store`, falling back to `system`.
    ///
    /// # Errors
    /// Storage failures from `store`.
    pub fn load(store: S, system: Theme) -> Result<Self, PreferenceError> {
        let stored = store
            .get(THEME_STORAGE_KEY)?
            .as_deref()
            .and_then(Theme::from_label);
        Ok(Self {
            store,
            current: stored.unwrap_or(system),
        })
    }

    /// Active theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Choose and persist `theme`.
    ///
    /// # Errors
    /// Storage failures from the store; the active theme is unchanged then.
    pub fn set(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.store.set(THEME_STORAGE_KEY, theme.as_str())?;
        self.current = theme;
        Ok(())
    }

    /// Switch to the other theme and persist it.
    ///
    /// # Errors
    /// Storage failures from the store.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
