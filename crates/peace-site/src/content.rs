//! Static page content
//!
//! Links are resolved at compile time so the server render and the hydrated
//! client always agree.

pub const SITE_NAME: &str = "Peace";
pub const SITE_TITLE: &str = "Peace - Enjoy Your Prayer Time Without Interruptions";
pub const SITE_DESCRIPTION: &str = "Experience tranquility in your prayer moments. Peace app seamlessly activates Do Not Disturb (DND) during your prayer times, creating a distraction-free space for deeper reflection and spiritual connection.";
pub const APP_ICON: &str = "/app-icon.png";

pub const HERO_HEADLINE: &str = "Enjoy Your Prayer Time Without Interruptions";

/// Installable package, overridable with `PEACE_APK_PATH` at build time
pub const APK_PATH: &str = match option_env!("PEACE_APK_PATH") {
    Some(path) => path,
    None => "/peace.apk",
};

/// Outbound issue tracker, set with `PEACE_ISSUE_TRACKER_URL` at build time
pub const ISSUE_TRACKER_URL: Option<&str> = option_env!("PEACE_ISSUE_TRACKER_URL");

pub const FEATURES_ANCHOR: &str = "features";
pub const SCREENSHOTS_ANCHOR: &str = "screenshots";
pub const DOWNLOAD_ANCHOR: &str = "download";

pub const COPYRIGHT: &str = "© 2024 Peace App. Developed by Abrar Mehraj";

/// In-page link shown in the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl AnchorLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_ANCHORS: &[AnchorLink] = &[
    AnchorLink {
        label: "Features",
        anchor: FEATURES_ANCHOR,
    },
    AnchorLink {
        label: "Screenshots",
        anchor: SCREENSHOTS_ANCHOR,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Intelligent Ringer Management",
        description: "Seamlessly switches between silent and normal modes based on your personalized schedule.",
    },
    Feature {
        title: "Flexible Silent Periods",
        description: "Define precise start and end times for your desired quiet moments throughout the day.",
    },
    Feature {
        title: "Intuitive User Experience",
        description: "Effortlessly manage your silent periods and preferences with our user-friendly interface.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const SCREENSHOT_WIDTH: u32 = 250;
pub const SCREENSHOT_HEIGHT: u32 = 500;

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "/screenshot1.jpeg",
        alt: "Peace App Interface",
    },
    Screenshot {
        src: "/screenshot2.jpeg",
        alt: "Peace App Settings",
    },
    Screenshot {
        src: "/screenshot3.jpeg",
        alt: "Peace App Schedule",
    },
];

/// Section ids rendered by the home page
pub const SECTION_ANCHORS: &[&str] = &[FEATURES_ANCHOR, SCREENSHOTS_ANCHOR, DOWNLOAD_ANCHOR];
