//! Mobile menu open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Glyph shown on the menu toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
        *self
    }

    /// Close if open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    pub fn icon(self) -> MenuIcon {
        if self.is_open() { MenuIcon::Close } else { MenuIcon::Menu }
    }
}
