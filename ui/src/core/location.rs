//! Location host seam between navigation components and the platform router.
//!
//! Components never reach for ambient router state. They receive a
//! [`LocationContext`] (a shared [`LocationSource`]) through Dioxus context and
//! use three operations on it:
//!
//! - `current()` – synchronous snapshot of the displayed location
//! - `subscribe(listener)` – change notifications, held alive by a [`Subscription`]
//! - `navigate(target)` – request a client-side transition
//!
//! [`LocationHub`] is the in-memory implementation. Platform shells feed it from
//! the Dioxus router (see `crate::hooks::use_location_bridge`); tests drive it
//! directly with [`LocationHub::publish`].
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching the UI thread
//! model of the renderer.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use dioxus::logger::tracing::debug;

/// Callback invoked with the new location on every change.
pub type Listener = Box<dyn FnMut(&str)>;

/// Location a navigation element points to.
///
/// Compared with exact string equality: no trailing slash, query string or
/// case normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavigationTarget(Rc<str>);

impl NavigationTarget {
    pub fn new(path: impl Into<Rc<str>>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this target is the location currently displayed.
    pub fn is_active(&self, current: &str) -> bool {
        is_active(self.as_str(), current)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// Exact-match activity check. An empty target never matches.
pub fn is_active(target: &str, current: &str) -> bool {
    !target.is_empty() && target == current
}

/// Guard for a registered [`Listener`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that was never attached to anything.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Explicit form of dropping the guard.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// Read/subscribe/navigate access to the host navigation system.
pub trait LocationSource {
    /// Location currently displayed.
    fn current(&self) -> String;

    /// Register `listener` for location changes until the returned guard drops.
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Ask the host for a client-side transition to `target`.
    fn navigate(&self, target: &NavigationTarget);
}

type SharedListener = Rc<RefCell<Listener>>;

struct HubState {
    current: String,
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
    navigator: Option<Rc<dyn Fn(&str)>>,
}

/// In-memory [`LocationSource`].
///
/// Without a navigator, `navigate` publishes the target directly (memory
/// history). With one, the navigator is the source of truth and the new
/// location is expected to come back through [`LocationHub::publish`].
#[derive(Clone)]
pub struct LocationHub {
    state: Rc<RefCell<HubState>>,
}

impl LocationHub {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::build(initial.into(), None)
    }

    pub fn with_navigator(initial: impl Into<String>, navigator: impl Fn(&str) + 'static) -> Self {
        Self::build(initial.into(), Some(Rc::new(navigator)))
    }

    fn build(current: String, navigator: Option<Rc<dyn Fn(&str)>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState {
                current,
                next_id: 0,
                listeners: Vec::new(),
                navigator,
            })),
        }
    }

    /// Record `location` as current and notify listeners.
    ///
    /// Returns `false` (and notifies nobody) when the location is unchanged.
    pub fn publish(&self, location: &str) -> bool {
        let snapshot: Vec<(u64, SharedListener)> = {
            let mut state = self.state.borrow_mut();
            if state.current == location {
                return false;
            }
            state.current = location.to_owned();
            state.listeners.clone()
        };

        debug!(
            location,
            listeners = snapshot.len(),
            "publishing location change"
        );

        for (id, listener) in snapshot {
            {
                let state = self.state.borrow();
                // A nested publish already delivered a newer location to everyone.
                if state.current != location {
                    break;
                }
                if !state.listeners.iter().any(|(live, _)| *live == id) {
                    continue;
                }
            }
            // Busy means the listener itself triggered this publish.
            let Ok(mut callback) = listener.try_borrow_mut() else {
                continue;
            };
            callback(location);

            // A publish made from inside the callback skipped this listener
            // while it was busy; hand it the newest location now.
            let mut delivered = location.to_owned();
            loop {
                let latest = {
                    let state = self.state.borrow();
                    if !state.listeners.iter().any(|(live, _)| *live == id) {
                        break;
                    }
                    state.current.clone()
                };
                if latest == delivered {
                    break;
                }
                callback(&latest);
                delivered = latest;
            }
        }
        true
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl Default for LocationHub {
    fn default() -> Self {
        Self::new("/")
    }
}

impl PartialEq for LocationHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for LocationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("LocationHub")
            .field("current", &state.current)
            .field("listeners", &state.listeners.len())
            .field("navigator", &state.navigator.is_some())
            .finish()
    }
}

impl LocationSource for LocationHub {
    fn current(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };

        let state: Weak<RefCell<HubState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(live, _)| *live != id);
            }
        })
    }

    fn navigate(&self, target: &NavigationTarget) {
        if target.is_empty() {
            debug!("ignoring navigation to an empty target");
            return;
        }
        let navigator = self.state.borrow().navigator.clone();
        match navigator {
            Some(navigator) => navigator(target.as_str()),
            None => {
                self.publish(target.as_str());
            }
        }
    }
}

/// Dioxus context value carrying the location host for a rendered tree.
#[derive(Clone)]
pub struct LocationContext(Rc<dyn LocationSource>);

impl LocationContext {
    pub fn new(source: impl LocationSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

impl Deref for LocationContext {
    type Target = dyn LocationSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for LocationContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocationContext")
            .field(&self.0.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder(hub: &LocationHub) -> (Rc<RefCell<Vec<String>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = hub.subscribe(Box::new(move |loc: &str| sink.borrow_mut().push(loc.to_string())));
        (seen, sub)
    }

    #[test]
    fn activity_is_exact_equality() {
        let about = NavigationTarget::from("/about");
        assert!(about.is_active("/about"));
        assert!(!about.is_active("/"));
        assert!(!about.is_active("/about/"));
        assert!(!about.is_active("/about/team"));
        assert!(!about.is_active("/About"));
        assert!(!about.is_active("/about?tab=1"));
        assert!(!NavigationTarget::from("/about/team").is_active("/about"));
    }

    #[test]
    fn empty_target_is_never_active() {
        let empty = NavigationTarget::default();
        assert!(empty.is_empty());
        for current in ["/", "/about", ""] {
            assert!(!empty.is_active(current), "active for {current:?}");
        }
    }

    #[test]
    fn publish_notifies_listeners_once_per_change() {
        let hub = LocationHub::new("/");
        let (seen, _sub) = recorder(&hub);

        assert!(hub.publish("/about"));
        assert!(!hub.publish("/about"));
        assert!(hub.publish("/"));

        assert_eq!(*seen.borrow(), vec!["/about", "/"]);
        assert_eq!(hub.current(), "/");
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let hub = LocationHub::new("/");
        let (seen, sub) = recorder(&hub);
        assert_eq!(hub.listener_count(), 1);

        hub.publish("/a");
        sub.unsubscribe();
        assert_eq!(hub.listener_count(), 0);
        hub.publish("/b");

        assert_eq!(*seen.borrow(), vec!["/a"]);
    }

    #[test]
    fn subscription_outliving_hub_is_harmless() {
        let hub = LocationHub::new("/");
        let (_seen, sub) = recorder(&hub);
        drop(hub);
        drop(sub);
        let _ = Subscription::detached();
    }

    #[test]
    fn active_state_follows_location_sequence() {
        let hub = LocationHub::new("/");
        let target = NavigationTarget::from("/about");
        let states = Rc::new(RefCell::new(vec![target.is_active(&hub.current())]));

        let sink = states.clone();
        let link = target.clone();
        let _sub = hub.subscribe(Box::new(move |loc: &str| sink.borrow_mut().push(link.is_active(loc))));

        hub.publish("/about");
        hub.publish("/style-guide");

        assert_eq!(*states.borrow(), vec![false, true, false]);
    }

    #[test]
    fn navigate_without_navigator_publishes() {
        let hub = LocationHub::default();
        let (seen, _sub) = recorder(&hub);

        hub.navigate(&"/about".into());
        hub.navigate(&NavigationTarget::default());

        assert_eq!(hub.current(), "/about");
        assert_eq!(*seen.borrow(), vec!["/about"]);
    }

    #[test]
    fn navigate_with_navigator_defers_to_it() {
        let requested = Rc::new(RefCell::new(Vec::new()));
        let sink = requested.clone();
        let hub = LocationHub::with_navigator("/", move |target: &str| sink.borrow_mut().push(target.to_string()));

        hub.navigate(&"/about".into());

        assert_eq!(*requested.borrow(), vec!["/about"]);
        assert_eq!(hub.current(), "/");
    }

    #[test]
    fn listener_may_unsubscribe_a_later_listener() {
        let hub = LocationHub::new("/");
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let slot = victim.clone();
        let _first = hub.subscribe(Box::new(move |_: &str| {
            slot.borrow_mut().take();
        }));
        let counter = calls.clone();
        *victim.borrow_mut() = Some(hub.subscribe(Box::new(move |_: &str| counter.set(counter.get() + 1))));

        hub.publish("/about");

        assert_eq!(calls.get(), 0);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn nested_publish_leaves_latest_location_everywhere() {
        let hub = LocationHub::new("/");
        let redirect = hub.clone();
        let redirector_saw = Rc::new(RefCell::new(Vec::new()));
        let redirector_sink = redirector_saw.clone();
        let _redirector = hub.subscribe(Box::new(move |loc: &str| {
            redirector_sink.borrow_mut().push(loc.to_string());
            if loc == "/old" {
                redirect.publish("/new");
            }
        }));
        let (seen, _sub) = recorder(&hub);

        hub.publish("/old");

        assert_eq!(hub.current(), "/new");
        assert_eq!(*redirector_saw.borrow(), vec!["/old", "/new"]);
        assert_eq!(*seen.borrow(), vec!["/new"]);
    }

    #[test]
    fn publishing_listener_that_unsubscribes_gets_no_redelivery() {
        let hub = LocationHub::new("/");
        let redirect = hub.clone();
        let own: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let slot = own.clone();
        let counter = calls.clone();
        *own.borrow_mut() = Some(hub.subscribe(Box::new(move |_: &str| {
            counter.set(counter.get() + 1);
            slot.borrow_mut().take();
            redirect.publish("/elsewhere");
        })));

        hub.publish("/about");

        assert_eq!(calls.get(), 1);
        assert_eq!(hub.current(), "/elsewhere");
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn context_compares_by_identity() {
        let hub = LocationHub::new("/");
        let a = LocationContext::new(hub.clone());
        let b = a.clone();
        let c = LocationContext::new(hub);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.current(), "/");
    }
}
