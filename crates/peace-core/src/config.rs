//! Interaction thresholds

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Width at or above which the navigation renders inline (Tailwind `sm`).
pub const DEFAULT_MENU_BREAKPOINT_PX: f64 = 640.0;

/// Scroll offset the page must pass before the scroll-to-top button shows.
pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 100.0;

/// Thresholds driving the viewport interaction controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Viewport width (px) at or above which the mobile menu is forced closed
    pub menu_breakpoint_px: f64,
    /// Vertical offset (px) strictly above which the scroll-to-top button shows
    pub scroll_top_threshold_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            menu_breakpoint_px: DEFAULT_MENU_BREAKPOINT_PX,
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.menu_breakpoint_px.is_finite() || self.menu_breakpoint_px <= 0.0 {
            return Err(CoreError::Config(format!(
                "menu breakpoint must be a positive width, got {}",
                self.menu_breakpoint_px
            )));
        }
        if !self.scroll_top_threshold_px.is_finite() || self.scroll_top_threshold_px < 0.0 {
            return Err(CoreError::Config(format!(
                "scroll-to-top threshold must be a non-negative offset, got {}",
                self.scroll_top_threshold_px
            )));
        }
        Ok(())
    }
}
