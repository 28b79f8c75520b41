//! Home page

use leptos::*;

use crate::components::*;
use crate::content::{
    APK_PATH, DOWNLOAD_ANCHOR, FEATURES, FEATURES_ANCHOR, HERO_HEADLINE, SCREENSHOTS,
    SCREENSHOTS_ANCHOR, SITE_DESCRIPTION,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="text-center mb-16">
                <h2 class="text-2xl sm:text-3xl font-semibold text-blue-300 mb-4 transition-colors duration-300 hover:text-blue-200">
                    {HERO_HEADLINE}
                </h2>
                <p class="text-lg sm:text-xl text-gray-400 mb-8 mx-auto max-w-2xl transition-colors duration-300 hover:text-gray-300">
                    {SITE_DESCRIPTION}
                </p>
            </section>

            // Key Features
            <section id=FEATURES_ANCHOR class="mb-16">
                <SectionHeading text="Key Features"/>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| view! {
                        <FeatureCard title=feature.title description=feature.description/>
                    }).collect_view()}
                </div>
            </section>

            // App Preview
            <section id=SCREENSHOTS_ANCHOR class="mb-16">
                <SectionHeading text="App Preview"/>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 justify-items-center">
                    {SCREENSHOTS.iter().map(|shot| view! {
                        <ScreenshotCard src=shot.src alt=shot.alt/>
                    }).collect_view()}
                </div>
            </section>

            // Download
            <section id=DOWNLOAD_ANCHOR class="text-center">
                <SectionHeading text="Get Peace Now"/>
                <a
                    href=APK_PATH
                    download=""
                    class="bg-blue-600 hover:bg-blue-500 text-white font-bold py-3 px-6 rounded-full transition-all duration-300 inline-block hover:shadow-lg hover:scale-105"
                >
                    "Download Peace APK"
                </a>
            </section>
        </div>
    }
}
