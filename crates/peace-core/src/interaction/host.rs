//! Host scrolling seam

/// Scrolling primitives provided by the rendering environment.
///
/// The browser implementation smooth-scrolls the window; tests record the
/// requests instead.
pub trait ScrollHost {
    /// Smooth-scroll the element with `anchor_id` to the top of the viewport.
    /// Returns `false` when no such element exists.
    fn scroll_into_view(&self, anchor_id: &str) -> bool;

    /// Smooth-scroll the viewport to a vertical offset.
    fn scroll_to_offset(&self, offset_y: f64);
}
