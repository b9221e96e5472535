use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::classes::class_names;
use crate::core::location::{LocationContext, LocationHub, NavigationTarget};
use crate::hooks::use_current_location;

/// Base class of every navigation link.
pub const LINK_CLASS: &str = "navbar__link";
/// Added while the link's target is the displayed location.
pub const LINK_ACTIVE_CLASS: &str = "navbar__link--active";

/// Anchor that highlights itself when `target` is the current location.
///
/// Reads the host from [`LocationContext`]; clicking asks the host for a
/// client-side transition instead of letting the browser reload the page.
/// An empty target renders but is never active and its click does nothing.
#[component]
pub fn NavLink(#[props(into)] target: String, #[props(into)] label: String) -> Element {
    let host = use_hook(|| {
        try_consume_context::<LocationContext>().unwrap_or_else(|| {
            warn!(link = %target, "NavLink rendered without a location host; it will stay inactive");
            LocationContext::new(LocationHub::new(""))
        })
    });
    let current = use_current_location(host.clone());

    let target = NavigationTarget::new(target);
    let active = target.is_active(&current.read());
    let class = class_names([(LINK_CLASS, true), (LINK_ACTIVE_CLASS, active)]);
    let aria_current = if active { "page" } else { "false" };

    let onclick = {
        let target = target.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            host.navigate(&target);
        }
    };

    rsx! {
        a {
            href: "{target}",
            class: "{class}",
            "aria-current": aria_current,
            onclick: onclick,
            "{label}"
        }
    }
}
