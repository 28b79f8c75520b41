//! Where a pointer interaction started, relative to the menu

use serde::{Deserialize, Serialize};

/// Region an interaction originated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionOrigin {
    /// Inside the expanded navigation panel
    Menu,
    /// Inside the hamburger button that toggles the panel
    ToggleControl,
    /// Anywhere else on the page
    Elsewhere,
}

impl InteractionOrigin {
    /// Build an origin from host hit tests. The menu wins when both regions
    /// report containment.
    pub fn classify(inside_menu: bool, inside_toggle: bool) -> Self {
        match (inside_menu, inside_toggle) {
            (true, _) => InteractionOrigin::Menu,
            (false, true) => InteractionOrigin::ToggleControl,
            (false, false) => InteractionOrigin::Elsewhere,
        }
    }

    pub fn is_outside(&self) -> bool {
        matches!(self, InteractionOrigin::Elsewhere)
    }
}

impl std::fmt::Display for InteractionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionOrigin::Menu => write!(f, "menu"),
            InteractionOrigin::ToggleControl => write!(f, "toggle"),
            InteractionOrigin::Elsewhere => write!(f, "elsewhere"),
        }
    }
}
