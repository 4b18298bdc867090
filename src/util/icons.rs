//! Inline Lucide SVG glyphs injected as `innerHTML`.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use crate::state::menu::MenuIcon;
use crate::state::theme::Theme;

pub const THEME_ICON_SIZE: u32 = 20;
pub const MENU_ICON_SIZE: u32 = 24;
pub const SCROLL_TOP_ICON_SIZE: u32 = 20;

fn svg(size: u32, name: &str, paths: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-{name}" aria-hidden="true">{paths}</svg>"#
    )
}

pub fn sun(size: u32) -> String {
    svg(
        size,
        "sun h-5 w-5",
        concat!(
            r#"<circle cx="12" cy="12" r="4"></circle>"#,
            r#"<path d="M12 2v2"></path><path d="M12 20v2"></path>"#,
            r#"<path d="M4.93 4.93l1.41 1.41"></path><path d="M17.66 17.66l1.41 1.41"></path>"#,
            r#"<path d="M2 12h2"></path><path d="M20 12h2"></path>"#,
            r#"<path d="M6.34 17.66l-1.41 1.41"></path><path d="M19.07 4.93l-1.41 1.41"></path>"#,
        ),
    )
}

pub fn moon(size: u32) -> String {
    svg(size, "moon h-5 w-5", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>"#)
}

pub fn menu(size: u32) -> String {
    svg(
        size,
        "menu",
        r#"<path d="M4 12h16"></path><path d="M4 18h16"></path><path d="M4 6h16"></path>"#,
    )
}

pub fn close(size: u32) -> String {
    svg(size, "x", r#"<path d="M18 6 6 18"></path><path d="M6 6 18 18"></path>"#)
}

pub fn arrow_up(size: u32) -> String {
    svg(size, "arrow-up", r#"<path d="m5 12 7-7 7 7"></path><path d="M12 19V5"></path>"#)
}

/// The theme toggle shows the theme it switches *to*: a sun while dark.
pub fn theme_toggle(theme: Theme) -> String {
    match theme {
        Theme::Dark => sun(THEME_ICON_SIZE),
        Theme::Light => moon(THEME_ICON_SIZE),
    }
}

pub fn menu_toggle(icon: MenuIcon) -> String {
    match icon {
        MenuIcon::Menu => menu(MENU_ICON_SIZE),
        MenuIcon::Close => close(MENU_ICON_SIZE),
    }
}
