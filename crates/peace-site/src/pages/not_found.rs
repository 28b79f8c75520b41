//! Fallback for unknown paths

use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="text-center py-24">
            <h2 class="text-3xl font-semibold text-blue-300 mb-4">"Page not found"</h2>
            <a href="/" class="text-gray-300 hover:text-blue-400 transition-colors duration-300">
                "Back to Peace"
            </a>
        </section>
    }
}
