//! Viewport interaction controller
//!
//! Turns raw viewport events (scroll, pointer, resize) into the two pieces of
//! transient page state the navigation renders from:
//! - whether the mobile menu panel is open
//! - whether the scroll-to-top button is visible
//!
//! It also forwards smooth-scroll requests to a [`ScrollHost`].

pub mod host;
pub mod origin;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::InteractionConfig;

pub use host::ScrollHost;
pub use origin::InteractionOrigin;

/// Read-only snapshot of the controller state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub menu_open: bool,
    pub scroll_top_visible: bool,
}

/// Owns the menu and scroll-to-top state for one mounted page.
///
/// Both flags start false. While the controller is inactive every event is
/// ignored.
#[derive(Debug, Clone)]
pub struct ViewportInteractionController {
    config: InteractionConfig,
    menu_open: bool,
    scroll_top_visible: bool,
    active: bool,
}

impl Default for ViewportInteractionController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl ViewportInteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            menu_open: false,
            scroll_top_visible: false,
            active: true,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            menu_open: self.menu_open,
            scroll_top_visible: self.scroll_top_visible,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resume event handling after [`deactivate`](Self::deactivate).
    pub fn activate(&mut self) {
        if !self.active {
            debug!("viewport interactions activated");
        }
        self.active = true;
    }

    /// Stop handling events and drop back to the initial state.
    pub fn deactivate(&mut self) {
        if self.active {
            debug!("viewport interactions deactivated");
        }
        self.active = false;
        self.menu_open = false;
        self.scroll_top_visible = false;
    }

    pub fn toggle_menu(&mut self) {
        if !self.active {
            return;
        }
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
    }

    pub fn close_menu(&mut self) {
        if !self.active {
            return;
        }
        self.set_menu_closed("explicit");
    }

    /// Close the menu for pointer interactions that started outside both the
    /// panel and its toggle. Presses on the toggle itself are left to
    /// [`toggle_menu`](Self::toggle_menu).
    pub fn on_outside_interaction(&mut self, origin: InteractionOrigin) {
        if !self.active || !origin.is_outside() {
            return;
        }
        self.set_menu_closed("outside interaction");
    }

    /// The panel only exists below the breakpoint.
    pub fn on_viewport_resize(&mut self, width: f64) {
        if !self.active {
            return;
        }
        if width >= self.config.menu_breakpoint_px {
            self.set_menu_closed("viewport at or above breakpoint");
        }
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        if !self.active {
            return;
        }
        // NaN compares false, which keeps the button hidden
        let visible = offset_y > self.config.scroll_top_threshold_px;
        if visible != self.scroll_top_visible {
            trace!(offset_y, visible, "scroll-to-top visibility changed");
        }
        self.scroll_top_visible = visible;
    }

    /// Smooth-scroll to an in-page anchor. Unknown anchors are ignored.
    pub fn scroll_to_anchor<H: ScrollHost>(&self, host: &H, anchor_id: &str) {
        if !self.active {
            return;
        }
        if !host.scroll_into_view(anchor_id) {
            debug!(anchor_id, "no element for anchor, skipping scroll");
        }
    }

    pub fn scroll_to_top<H: ScrollHost>(&self, host: &H) {
        if !self.active {
            return;
        }
        host.scroll_to_offset(0.0);
    }

    fn set_menu_closed(&mut self, reason: &'static str) {
        if self.menu_open {
            debug!(reason, "menu closed");
        }
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum ScrollRequest {
        Anchor(String),
        Offset(f64),
    }

    /// Records scroll requests; only the listed anchors exist.
    struct RecordingHost {
        anchors: Vec<&'static str>,
        requests: RefCell<Vec<ScrollRequest>>,
    }

    impl RecordingHost {
        fn with_anchors(anchors: &[&'static str]) -> Self {
            Self {
                anchors: anchors.to_vec(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ScrollRequest> {
            self.requests.borrow().clone()
        }
    }

    impl ScrollHost for RecordingHost {
        fn scroll_into_view(&self, anchor_id: &str) -> bool {
            if !self.anchors.contains(&anchor_id) {
                return false;
            }
            self.requests
                .borrow_mut()
                .push(ScrollRequest::Anchor(anchor_id.to_string()));
            true
        }

        fn scroll_to_offset(&self, offset_y: f64) {
            self.requests.borrow_mut().push(ScrollRequest::Offset(offset_y));
        }
    }

    fn open_controller() -> ViewportInteractionController {
        let mut controller = ViewportInteractionController::default();
        controller.toggle_menu();
        assert!(controller.menu_open());
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = ViewportInteractionController::default();
        assert!(!controller.menu_open());
        assert!(!controller.scroll_top_visible());
        assert!(controller.is_active());
    }

    #[test]
    fn test_toggle_parity() {
        for initial_open in [false, true] {
            let mut controller = ViewportInteractionController::default();
            if initial_open {
                controller.toggle_menu();
            }
            for n in 1..=9 {
                controller.toggle_menu();
                assert_eq!(controller.menu_open(), initial_open ^ (n % 2 == 1));
            }
        }
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        let mut controller = ViewportInteractionController::default();
        controller.on_scroll(99.0);
        assert!(!controller.scroll_top_visible());
        controller.on_scroll(100.0);
        assert!(!controller.scroll_top_visible());
        controller.on_scroll(101.0);
        assert!(controller.scroll_top_visible());
        controller.on_scroll(100.5);
        assert!(controller.scroll_top_visible());
    }

    #[test]
    fn test_scroll_depends_only_on_offset() {
        let mut controller = ViewportInteractionController::default();
        for y in 0..=400 {
            let y = y as f64;
            controller.on_scroll(y);
            assert_eq!(controller.scroll_top_visible(), y > 100.0);
        }
        for y in (0..=400).rev() {
            let y = y as f64;
            controller.on_scroll(y);
            assert_eq!(controller.scroll_top_visible(), y > 100.0);
        }
    }

    #[test]
    fn test_scroll_sequence() {
        let mut controller = ViewportInteractionController::default();
        let visibility: Vec<bool> = [0.0, 50.0, 150.0, 80.0]
            .into_iter()
            .map(|y| {
                controller.on_scroll(y);
                controller.scroll_top_visible()
            })
            .collect();
        assert_eq!(visibility, vec![false, false, true, false]);
    }

    #[test]
    fn test_scroll_non_finite_hides_button() {
        let mut controller = ViewportInteractionController::default();
        controller.on_scroll(500.0);
        controller.on_scroll(f64::NAN);
        assert!(!controller.scroll_top_visible());
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut controller = open_controller();
        controller.on_scroll(1000.0);
        assert!(controller.menu_open());
    }

    #[test]
    fn test_resize_at_or_above_breakpoint_closes() {
        for width in [640.0, 641.0, 800.0, 1920.0] {
            let mut controller = open_controller();
            controller.on_viewport_resize(width);
            assert!(!controller.menu_open(), "width {width}");

            let mut closed = ViewportInteractionController::default();
            closed.on_viewport_resize(width);
            assert!(!closed.menu_open(), "width {width}");
        }
    }

    #[test]
    fn test_resize_below_breakpoint_keeps_menu() {
        for width in [320.0, 375.0, 639.9] {
            let mut controller = open_controller();
            controller.on_viewport_resize(width);
            assert!(controller.menu_open(), "width {width}");
        }
    }

    #[test]
    fn test_resize_uses_configured_breakpoint() {
        let mut controller = ViewportInteractionController::new(InteractionConfig {
            menu_breakpoint_px: 768.0,
            ..Default::default()
        });
        controller.toggle_menu();
        controller.on_viewport_resize(700.0);
        assert!(controller.menu_open());
        controller.on_viewport_resize(768.0);
        assert!(!controller.menu_open());
    }

    #[test]
    fn test_toggle_then_widen_scenario() {
        let mut controller = ViewportInteractionController::default();
        controller.on_viewport_resize(375.0);
        assert!(!controller.menu_open());
        controller.toggle_menu();
        assert!(controller.menu_open());
        controller.on_viewport_resize(800.0);
        assert!(!controller.menu_open());
    }

    #[test]
    fn test_interaction_inside_regions_is_ignored() {
        for origin in [InteractionOrigin::Menu, InteractionOrigin::ToggleControl] {
            let mut open = open_controller();
            open.on_outside_interaction(origin);
            assert!(open.menu_open(), "origin {origin}");

            let mut closed = ViewportInteractionController::default();
            closed.on_outside_interaction(origin);
            assert!(!closed.menu_open(), "origin {origin}");
        }
    }

    #[test]
    fn test_interaction_elsewhere_closes() {
        let mut controller = open_controller();
        controller.on_outside_interaction(InteractionOrigin::Elsewhere);
        assert!(!controller.menu_open());

        controller.on_outside_interaction(InteractionOrigin::Elsewhere);
        assert!(!controller.menu_open());
    }

    #[test]
    fn test_toggle_press_does_not_reclose() {
        // The pointer press on the toggle arrives before its click handler.
        let mut controller = ViewportInteractionController::default();
        controller.on_outside_interaction(InteractionOrigin::classify(false, true));
        controller.toggle_menu();
        assert!(controller.menu_open());
    }

    #[test]
    fn test_close_menu() {
        let mut controller = open_controller();
        controller.close_menu();
        assert!(!controller.menu_open());
        controller.close_menu();
        assert!(!controller.menu_open());
    }

    #[test]
    fn test_scroll_to_known_anchor() {
        let host = RecordingHost::with_anchors(&["features", "screenshots"]);
        let controller = ViewportInteractionController::default();
        controller.scroll_to_anchor(&host, "screenshots");
        assert_eq!(
            host.requests(),
            vec![ScrollRequest::Anchor("screenshots".to_string())]
        );
    }

    #[test]
    fn test_scroll_to_missing_anchor_is_noop() {
        let host = RecordingHost::with_anchors(&["features"]);
        let mut controller = open_controller();
        controller.on_scroll(250.0);
        let before = controller.view_state();

        controller.scroll_to_anchor(&host, "nonexistent");

        assert_eq!(controller.view_state(), before);
        assert!(host.requests().is_empty());
    }

    #[test]
    fn test_scroll_to_top() {
        let host = RecordingHost::with_anchors(&[]);
        let mut controller = ViewportInteractionController::default();
        controller.on_scroll(900.0);
        controller.scroll_to_top(&host);
        assert_eq!(host.requests(), vec![ScrollRequest::Offset(0.0)]);
        // Visibility follows the scroll events the host delivers afterwards
        assert!(controller.scroll_top_visible());
    }

    #[test]
    fn test_deactivate_resets_and_ignores_events() {
        let host = RecordingHost::with_anchors(&["features"]);
        let mut controller = open_controller();
        controller.on_scroll(300.0);

        controller.deactivate();
        assert!(!controller.is_active());
        assert_eq!(controller.view_state(), ViewState::default());

        controller.toggle_menu();
        controller.on_scroll(300.0);
        controller.scroll_to_anchor(&host, "features");
        controller.scroll_to_top(&host);
        assert_eq!(controller.view_state(), ViewState::default());
        assert!(host.requests().is_empty());

        controller.activate();
        controller.toggle_menu();
        controller.on_scroll(300.0);
        assert_eq!(
            controller.view_state(),
            ViewState {
                menu_open: true,
                scroll_top_visible: true,
            }
        );
    }

    #[test]
    fn test_menu_and_scroll_are_independent() {
        let mut controller = ViewportInteractionController::default();
        controller.on_scroll(150.0);
        controller.toggle_menu();
        controller.on_viewport_resize(1024.0);
        assert!(!controller.menu_open());
        assert!(controller.scroll_top_visible());
    }

    #[test]
    fn test_view_state_serializes() {
        let mut controller = ViewportInteractionController::default();
        controller.toggle_menu();
        let json = serde_json::to_string(&controller.view_state()).unwrap();
        assert_eq!(json, r#"{"menu_open":true,"scroll_top_visible":false}"#);
    }
}
