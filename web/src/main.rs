use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::hooks::use_location_bridge;
use ui::views::{About, Home, StyleGuide};

// Paths must match `ui::views::paths`.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/style-guide")]
    StyleGuide {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Shared layout for every web route: bridges the router into the location
/// host the navbar links observe, then renders the page below the navbar.
#[component]
fn WebLayout() -> Element {
    use_location_bridge::<Route>();

    rsx! {
        AppNavbar {}
        main { Outlet::<Route> {} }
    }
}
