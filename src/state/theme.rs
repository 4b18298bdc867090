//! Light/dark theme preference.
//!
//! Precedence on load: stored preference, then the system color scheme,
//! then light. Only an explicit toggle writes to storage; a system scheme
//! change is followed only while nothing has been stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"light"`/`"dark"` is treated as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Effective theme for a stored value and the current system preference.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark))
}

/// Owns the current theme and its persisted copy.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn load(store: S, prefers_dark: bool) -> Self {
        let current = resolve_initial(store.load().as_deref(), prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether the user has ever made an explicit choice.
    pub fn has_explicit_choice(&self) -> bool {
        self.store.load().as_deref().and_then(Theme::parse).is_some()
    }

    /// Invert and persist. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.store.save(next.as_str());
        self.current = next;
        next
    }

    /// Follow a live system scheme change unless a choice is stored.
    ///
    /// Returns the theme to apply, or `None` when the change is ignored.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        self.current = Theme::from_prefers_dark(prefers_dark);
        Some(self.current)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
