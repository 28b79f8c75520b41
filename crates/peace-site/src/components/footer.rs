//! Site footer

use leptos::*;

use crate::content::{COPYRIGHT, ISSUE_TRACKER_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="container mx-auto px-4 py-6 text-center text-gray-400 transition-colors duration-300 hover:text-gray-300">
            <p>{COPYRIGHT}</p>
            {ISSUE_TRACKER_URL.map(|url| view! {
                <p class="mt-2">
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-400 hover:text-blue-300 transition-colors duration-300"
                    >
                        "Report an issue"
                    </a>
                </p>
            })}
        </footer>
    }
}
