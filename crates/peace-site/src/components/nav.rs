//! Site header and navigation

use leptos::*;

use crate::content::{AnchorLink, APK_PATH, APP_ICON, NAV_ANCHORS, SITE_NAME};
use crate::interaction::use_viewport_interactions;

const LINK_CLASS: &str = "text-gray-300 hover:text-blue-400 transition-colors duration-300";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let interactions = use_viewport_interactions();
    let menu_open = interactions.menu_open();

    // Collapsed below `sm` unless open; always shown from `sm` up
    let panel_class = move || {
        let state = if menu_open.get() {
            "opacity-100 max-h-96"
        } else {
            "opacity-0 max-h-0 sm:opacity-100 sm:max-h-96"
        };
        format!(
            "absolute top-full left-0 w-full bg-gray-800 sm:relative sm:bg-transparent sm:w-auto \
             transition-all duration-300 ease-in-out sm:block overflow-hidden {state}"
        )
    };

    view! {
        <header class="container mx-auto px-4 py-6 flex flex-col sm:flex-row justify-between items-center">
            <div class="flex items-center justify-between w-full sm:w-auto mb-4 sm:mb-0">
                // Logo
                <div class="flex items-center">
                    <h1 class="text-4xl font-bold text-blue-400 transition-colors duration-300 hover:text-blue-300">
                        {SITE_NAME}
                    </h1>
                    <img
                        src=APP_ICON
                        alt="App Icon"
                        width="40"
                        height="40"
                        class="ml-2 bg-white rounded-full transition-transform duration-300 hover:scale-110"
                    />
                </div>

                // Mobile menu button
                <button
                    node_ref=interactions.regions().toggle
                    class="sm:hidden text-gray-300 hover:text-blue-400 transition-colors duration-300"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| interactions.toggle_menu()
                >
                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                    </svg>
                </button>
            </div>

            <nav class="relative w-full sm:w-auto">
                <div node_ref=interactions.regions().menu class=panel_class>
                    <div class="flex flex-col sm:flex-row space-y-2 sm:space-y-0 sm:space-x-6 p-4 sm:p-0">
                        {NAV_ANCHORS.iter().map(|link| view! { <AnchorNavLink link=*link/> }).collect_view()}
                        <a href=APK_PATH class=LINK_CLASS>
                            <span class="flex items-center">
                                <svg class="h-5 w-5 mr-2" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4"/>
                                </svg>
                                "Download"
                            </span>
                        </a>
                    </div>
                </div>
            </nav>
        </header>
    }
}

/// Smooth-scrolls to its section and folds the mobile panel away
#[component]
fn AnchorNavLink(link: AnchorLink) -> impl IntoView {
    let interactions = use_viewport_interactions();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        interactions.scroll_to_anchor(link.anchor);
        interactions.close_menu();
    };

    view! {
        <a href=link.href() class=LINK_CLASS on:click=on_click>
            {link.label}
        </a>
    }
}
