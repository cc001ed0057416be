//! Back-to-top visibility tracking.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Remembers the last visibility so scroll events only touch the DOM on change.
#[derive(Debug, Clone, PartialEq)]
pub struct BackToTop {
    threshold_px: f64,
    visible: Option<bool>,
}

impl BackToTop {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, visible: None }
    }

    /// Feed the current vertical scroll offset.
    ///
    /// Returns the new visibility when it differs from the last one reported.
    /// The first call always reports.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_y > self.threshold_px;
        if self.visible == Some(visible) {
            return None;
        }
        self.visible = Some(visible);
        Some(visible)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(false)
    }
}
