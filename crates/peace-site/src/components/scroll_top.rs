//! Floating scroll-to-top button

use leptos::*;

use crate::interaction::use_viewport_interactions;

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let interactions = use_viewport_interactions();
    let visible = interactions.scroll_top_visible();

    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-6 right-6 p-3 bg-blue-600 hover:bg-blue-500 text-white rounded-full shadow-lg transition-all duration-300 hover:scale-110"
                aria-label="Scroll to top"
                on:click=move |_| interactions.scroll_to_top()
            >
                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 15l7-7 7 7"/>
                </svg>
            </button>
        </Show>
    }
}
