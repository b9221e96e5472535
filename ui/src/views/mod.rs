//! Page views. Each view is a plain component; platform shells map routes to them.

mod about;
mod home;
pub mod style_guide;

pub use about::About;
pub use home::Home;
pub use style_guide::StyleGuide;

/// Paths of the primary pages. Platform `Route` enums must render the same strings.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const STYLE_GUIDE: &str = "/style-guide";
}
