//! Screen navigation with focus notifications.
//!
//! A screen subscribes to focus events for its route and gets called every
//! time that route becomes the visible one: on first navigation and again
//! when the user comes back to it.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Inventory,
    /// Product capture screen.
    Camera,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Inventory => "Inventory",
            Route::Camera => "Camera",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type FocusCallback = Arc<dyn Fn() + Send + Sync>;

struct Listener {
    id: u64,
    route: Route,
    callback: FocusCallback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
    stack: Vec<Route>,
}

/// Route stack plus focus listeners.
#[derive(Clone, Default)]
pub struct Navigator {
    inner: Arc<Mutex<Registry>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` whenever `route` gains focus.
    ///
    /// The listener stays registered until the returned subscription is
    /// dropped or unsubscribed. Callbacks run on the navigating thread and
    /// must not navigate themselves.
    pub fn on_focus<F>(&self, route: Route, callback: F) -> FocusSubscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push(Listener {
            id,
            route,
            callback: Arc::new(callback),
        });

        FocusSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Push `route` and focus it. Navigating to the current route does nothing.
    pub fn navigate(&self, route: Route) {
        {
            let mut registry = self.lock();
            if registry.stack.last() == Some(&route) {
                return;
            }
            registry.stack.push(route);
        }

        tracing::debug!(route = %route, "navigate");
        self.emit_focus(route);
    }

    /// Pop the current route and refocus the one below it.
    ///
    /// Returns `false` when there is nothing to go back to.
    pub fn go_back(&self) -> bool {
        let focused = {
            let mut registry = self.lock();
            if registry.stack.len() <= 1 {
                return false;
            }
            registry.stack.pop();
            registry.stack.last().copied()
        };

        if let Some(route) = focused {
            tracing::debug!(route = %route, "navigate back");
            self.emit_focus(route);
        }
        true
    }

    pub fn current(&self) -> Option<Route> {
        self.lock().stack.last().copied()
    }

    pub fn listener_count(&self, route: Route) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|listener| listener.route == route)
            .count()
    }

    fn emit_focus(&self, route: Route) {
        let callbacks: Vec<FocusCallback> = self
            .lock()
            .listeners
            .iter()
            .filter(|listener| listener.route == route)
            .map(|listener| Arc::clone(&listener.callback))
            .collect();

        tracing::debug!(route = %route, listeners = callbacks.len(), "focus");
        for callback in callbacks {
            callback();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Registration handle returned by [`Navigator::on_focus`].
#[must_use = "dropping the subscription removes the focus listener"]
pub struct FocusSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl FocusSubscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for FocusSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut registry = inner.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.retain(|listener| listener.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_focus_fires_on_navigate_and_return() {
        let navigator = Navigator::new();
        let (count, callback) = counter();
        let _subscription = navigator.on_focus(Route::Inventory, callback);

        navigator.navigate(Route::Inventory);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        navigator.navigate(Route::Camera);
        assert_eq!(navigator.current(), Some(Route::Camera));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(navigator.go_back());
        assert_eq!(navigator.current(), Some(Route::Inventory));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let navigator = Navigator::new();
        let (count, callback) = counter();
        let _subscription = navigator.on_focus(Route::Inventory, callback);

        navigator.navigate(Route::Inventory);
        navigator.navigate(Route::Inventory);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_go_back_on_root_does_nothing() {
        let navigator = Navigator::new();
        assert!(!navigator.go_back());

        navigator.navigate(Route::Inventory);
        assert!(!navigator.go_back());
        assert_eq!(navigator.current(), Some(Route::Inventory));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let navigator = Navigator::new();
        let (count, callback) = counter();
        let subscription = navigator.on_focus(Route::Inventory, callback);
        assert_eq!(navigator.listener_count(Route::Inventory), 1);

        subscription.unsubscribe();
        assert_eq!(navigator.listener_count(Route::Inventory), 0);

        navigator.navigate(Route::Inventory);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let navigator = Navigator::new();
        {
            let (_count, callback) = counter();
            let _subscription = navigator.on_focus(Route::Inventory, callback);
            assert_eq!(navigator.listener_count(Route::Inventory), 1);
        }
        assert_eq!(navigator.listener_count(Route::Inventory), 0);
    }

    #[test]
    fn test_listeners_only_see_their_route() {
        let navigator = Navigator::new();
        let (inventory_count, inventory_cb) = counter();
        let (camera_count, camera_cb) = counter();
        let _a = navigator.on_focus(Route::Inventory, inventory_cb);
        let _b = navigator.on_focus(Route::Camera, camera_cb);

        navigator.navigate(Route::Camera);
        assert_eq!(inventory_count.load(Ordering::SeqCst), 0);
        assert_eq!(camera_count.load(Ordering::SeqCst), 1);
    }
}
