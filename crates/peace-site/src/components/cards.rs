//! Card components for the home page

use leptos::*;

use crate::content::{SCREENSHOT_HEIGHT, SCREENSHOT_WIDTH};

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-6 rounded-lg transition-transform duration-300 hover:scale-105">
            <h4 class="text-xl font-semibold text-blue-300 mb-3 transition-colors duration-300 hover:text-blue-200">
                {title}
            </h4>
            <p class="text-gray-400 transition-colors duration-300 hover:text-gray-300">{description}</p>
        </div>
    }
}

#[component]
pub fn ScreenshotCard(
    src: &'static str,
    alt: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            width=SCREENSHOT_WIDTH.to_string()
            height=SCREENSHOT_HEIGHT.to_string()
            loading="lazy"
            class="rounded-lg shadow-lg hover:scale-105 transition-all duration-300 cursor-pointer"
        />
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold text-blue-300 mb-6 text-center transition-colors duration-300 hover:text-blue-200">
            {text}
        </h3>
    }
}
