//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use peace_core::InteractionConfig;

use crate::components::*;
use crate::content::{APP_ICON, SITE_DESCRIPTION, SITE_TITLE};
use crate::interaction::{provide_viewport_interactions, MenuRegions};
use crate::pages::*;

/// Thresholds shared by the server render and the hydrated client
pub fn interaction_config() -> InteractionConfig {
    InteractionConfig::default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_viewport_interactions(MenuRegions::new(), interaction_config());

    view! {
        <Html lang="en"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Link rel="icon" href=APP_ICON/>
        <Stylesheet id="leptos" href="/pkg/peace-site.css"/>

        <Router>
            <div class="min-h-screen bg-gradient-to-b from-gray-900 to-gray-800 text-white">
                <SiteHeader/>
                <main class="container mx-auto px-4 py-12">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
                <ScrollToTopButton/>
            </div>
        </Router>
    }
}
