//! Browser binding for the viewport interaction controller
//!
//! The controller from `peace-core` is kept in a `StoredValue`; its state is
//! mirrored into a signal so components re-render when it changes. Only the
//! methods on [`ViewportInteractions`] can change that state.

use leptos::html::{Button, Div};
use leptos::*;
use peace_core::{
    InteractionConfig, InteractionOrigin, ScrollHost, ViewState, ViewportInteractionController,
};
use tracing::debug;
use wasm_bindgen::JsCast;

/// DOM regions that count as "inside" the navigation menu
#[derive(Clone, Copy)]
pub struct MenuRegions {
    pub menu: NodeRef<Div>,
    pub toggle: NodeRef<Button>,
}

impl Default for MenuRegions {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRegions {
    pub fn new() -> Self {
        Self {
            menu: create_node_ref(),
            toggle: create_node_ref(),
        }
    }

    fn origin_of(&self, target: Option<&web_sys::Node>) -> InteractionOrigin {
        let inside_menu = self
            .menu
            .get_untracked()
            .map(|el| el.contains(target))
            .unwrap_or(false);
        let inside_toggle = self
            .toggle
            .get_untracked()
            .map(|el| el.contains(target))
            .unwrap_or(false);
        InteractionOrigin::classify(inside_menu, inside_toggle)
    }
}

/// Smooth scrolling on the browser window
pub struct BrowserScrollHost;

impl ScrollHost for BrowserScrollHost {
    fn scroll_into_view(&self, anchor_id: &str) -> bool {
        let Some(element) = document().get_element_by_id(anchor_id) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_offset(&self, offset_y: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(offset_y);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Handle to the page's interaction state, shared through context
#[derive(Clone, Copy)]
pub struct ViewportInteractions {
    controller: StoredValue<ViewportInteractionController>,
    state: RwSignal<ViewState>,
    menu_open: Memo<bool>,
    scroll_top_visible: Memo<bool>,
    regions: MenuRegions,
}

impl ViewportInteractions {
    pub fn menu_open(&self) -> Signal<bool> {
        self.menu_open.into()
    }

    pub fn scroll_top_visible(&self) -> Signal<bool> {
        self.scroll_top_visible.into()
    }

    pub fn regions(&self) -> MenuRegions {
        self.regions
    }

    pub fn toggle_menu(&self) {
        self.apply(|c| c.toggle_menu());
    }

    pub fn close_menu(&self) {
        self.apply(|c| c.close_menu());
    }

    pub fn scroll_to_anchor(&self, anchor_id: &str) {
        self.controller
            .try_with_value(|c| c.scroll_to_anchor(&BrowserScrollHost, anchor_id));
    }

    pub fn scroll_to_top(&self) {
        self.controller
            .try_with_value(|c| c.scroll_to_top(&BrowserScrollHost));
    }

    fn apply(&self, f: impl FnOnce(&mut ViewportInteractionController)) {
        let Some(next) = self.controller.try_update_value(|c| {
            f(c);
            c.view_state()
        }) else {
            return;
        };
        if self.state.try_get_untracked() != Some(next) {
            self.state.try_set(next);
        }
    }
}

/// Create the page's interaction state and register its window listeners.
///
/// Listeners are removed and the controller deactivated when the calling
/// reactive scope is cleaned up.
pub fn provide_viewport_interactions(
    regions: MenuRegions,
    config: InteractionConfig,
) -> ViewportInteractions {
    let controller = store_value(ViewportInteractionController::new(config));
    let state = create_rw_signal(ViewState::default());
    let menu_open = create_memo(move |_| state.with(|s| s.menu_open));
    let scroll_top_visible = create_memo(move |_| state.with(|s| s.scroll_top_visible));

    let interactions = ViewportInteractions {
        controller,
        state,
        menu_open,
        scroll_top_visible,
        regions,
    };

    let scroll = window_event_listener(ev::scroll, move |_| {
        let offset = current_scroll_offset();
        interactions.apply(|c| c.on_scroll(offset));
    });
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = current_viewport_width() {
            interactions.apply(|c| c.on_viewport_resize(width));
        }
    });
    let press = window_event_listener(ev::pointerdown, move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let origin = regions.origin_of(target.as_ref());
        interactions.apply(|c| c.on_outside_interaction(origin));
    });

    // Browser only: pick up a restored scroll position and the initial width
    create_effect(move |_| {
        let offset = current_scroll_offset();
        let width = current_viewport_width();
        interactions.apply(|c| {
            c.on_scroll(offset);
            if let Some(width) = width {
                c.on_viewport_resize(width);
            }
        });
        debug!("viewport listeners registered");
    });

    on_cleanup(move || {
        scroll.remove();
        resize.remove();
        press.remove();
        controller.try_update_value(|c| c.deactivate());
        debug!("viewport listeners removed");
    });

    provide_context(interactions);
    interactions
}

pub fn use_viewport_interactions() -> ViewportInteractions {
    expect_context::<ViewportInteractions>()
}

fn current_scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn current_viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}
