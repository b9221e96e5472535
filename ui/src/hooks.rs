//! Hooks connecting components to the location host.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::location::{LocationContext, LocationHub};

/// Current location as a component-local signal.
///
/// The signal is seeded synchronously from `host.current()` and then written by
/// a host subscription. The subscription lives exactly as long as the calling
/// component: it is released when the component unmounts.
pub fn use_current_location(host: LocationContext) -> Signal<String> {
    let mut current = use_signal(|| host.current());

    let subscription = use_hook(|| {
        let guard = host.subscribe(Box::new(move |location: &str| {
            current.set(location.to_string());
        }));
        Rc::new(RefCell::new(Some(guard)))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    current
}

/// Install a [`LocationHub`] driven by the Dioxus router for `R`.
///
/// Must be called from a component rendered inside `Router::<R>` (typically
/// the layout). Navigation requests are parsed into `R` and pushed on the
/// router navigator; every route change, including history back/forward, is
/// published to the hub. The hub is provided to descendants as
/// [`LocationContext`].
pub fn use_location_bridge<R>() -> LocationContext
where
    R: Routable,
    <R as FromStr>::Err: Display,
{
    let path = use_route::<R>().to_string();

    let hub = use_hook(|| {
        let navigator = navigator();
        LocationHub::with_navigator(path.clone(), move |requested: &str| {
            match requested.parse::<R>() {
                Ok(route) => {
                    if let Some(failure) = navigator.push(route) {
                        warn!(requested, ?failure, "router refused navigation");
                    }
                }
                Err(err) => {
                    warn!(requested, %err, "ignoring navigation to an unroutable target");
                }
            }
        })
    });

    let context = use_context_provider({
        let hub = hub.clone();
        move || LocationContext::new(hub)
    });

    use_effect(use_reactive((&path,), move |(path,)| {
        hub.publish(&path);
    }));

    context
}
