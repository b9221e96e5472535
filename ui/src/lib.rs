//! Shared UI crate for Trailhead. Components, views and the location host live
//! here; platform crates only own their `Route` enum and launch code.

use dioxus::prelude::*;

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    // Shared layout header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Location-aware navigation link (components/nav_link.rs)
    pub mod nav_link;
    pub use nav_link::NavLink;
}

/// Unified theme stylesheet shared by every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same theme as a string, for builds that inline it instead of loading the asset.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
