//! Scroll position snapshot shared by the progress bar and scroll-to-top.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the page.
    pub offset: f64,
    /// Full height of the document element.
    pub scroll_height: f64,
    /// Height of the window's layout viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(1.0)
    }

    /// Scroll progress in percent, `offset / max_scroll * 100`.
    pub fn progress_percent(&self) -> f64 {
        self.offset / self.max_scroll() * 100.0
    }

    /// Strictly past `threshold`.
    pub fn is_past(&self, threshold: f64) -> bool {
        self.offset > threshold
    }
}

/// CSS `width` value for the progress bar.
pub fn progress_width(metrics: &ScrollMetrics) -> String {
    format!("{}%", metrics.progress_percent())
}
