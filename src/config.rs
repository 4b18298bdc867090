//! Page configuration: selectors, thresholds and storage key.
//!
//! Defaults describe the stock portfolio markup. A page can override any
//! subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "fallback_email": "me@example.org", "selectors": { "progress_bar": "#progress" } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_FALLBACK_EMAIL: &str = "example@example.com";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ACTIVE_SECTION_THRESHOLD: f64 = 0.55;
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 600.0;

/// Element id of the optional inline override block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    /// Contact recipient when the page exposes no `mailto:` link.
    pub fallback_email: String,
    /// Visible fraction at which a `[data-animate]` element is revealed.
    pub reveal_threshold: f64,
    /// Visible fraction a section needs before it can become active.
    pub active_section_threshold: f64,
    /// Scroll offset past which the scroll-to-top control shows.
    pub scroll_top_threshold: f64,
    pub selectors: Selectors,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            fallback_email: DEFAULT_FALLBACK_EMAIL.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            active_section_threshold: DEFAULT_ACTIVE_SECTION_THRESHOLD,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            selectors: Selectors::default(),
        }
    }
}

/// CSS selectors for the markup each component attaches to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub progress_bar: String,
    pub reveal: String,
    pub primary_nav: String,
    pub sections: String,
    pub menu_toggle: String,
    pub header_container: String,
    pub contact_form: String,
    pub about_mailto: String,
    pub any_mailto: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: r#"header button[aria-label="Toggle theme"]"#.to_owned(),
            progress_bar: ".fixed.top-0.left-0.h-1".to_owned(),
            reveal: "[data-animate]".to_owned(),
            primary_nav: r#"header nav[aria-label="Primary"]"#.to_owned(),
            sections: "main section[id]".to_owned(),
            menu_toggle: r#"header button[aria-label="Toggle navigation menu"]"#.to_owned(),
            header_container: "header .mx-auto.max-w-6xl".to_owned(),
            contact_form: "#contact form".to_owned(),
            about_mailto: r##"#about a[href^="mailto:"]"##.to_owned(),
            any_mailto: r#"a[href^="mailto:"]"#.to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Parse an override block; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Read the inline override block from the document, if any.
    ///
    /// Malformed JSON is logged and the defaults are used instead.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
