//! Footer slide-away on scroll.
//!
//! Scrolling down pushes the fixed footer below the viewport by the distance
//! scrolled, up to its own height; scrolling up pulls it back by the same
//! amount.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FooterOffset {
    accumulated: f64,
    last_scroll_y: f64,
    footer_height: f64,
}

impl FooterOffset {
    pub fn new(scroll_y: f64, footer_height: f64) -> Self {
        Self { accumulated: 0.0, last_scroll_y: scroll_y, footer_height: footer_height.max(0.0) }
    }

    pub fn set_footer_height(&mut self, footer_height: f64) {
        self.footer_height = footer_height.max(0.0);
        self.accumulated = self.accumulated.min(self.footer_height);
    }

    /// Record a new scroll position; returns the footer's `bottom` offset in
    /// pixels (zero or negative).
    pub fn on_scroll(&mut self, scroll_y: f64) -> f64 {
        let diff = scroll_y - self.last_scroll_y;
        self.accumulated = (self.accumulated + diff).max(0.0).min(self.footer_height);
        self.last_scroll_y = scroll_y;
        self.bottom()
    }

    pub fn bottom(&self) -> f64 {
        -self.accumulated
    }
}
