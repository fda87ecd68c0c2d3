//! The navigation store: single source of truth for "where are we".

use std::collections::HashMap;

use dioxus::prelude::*;

/// Current logical location plus arbitrary navigation-time parameters.
///
/// Paths are plain strings and are not validated here — any string is
/// accepted, and validity is the router's concern. Provided once from the
/// root component; every route read and mutation goes through this store.
#[derive(Clone, Copy)]
pub struct NavState {
    route: Signal<String>,
    params: Signal<HashMap<String, String>>,
}

impl NavState {
    pub fn new(initial: &str) -> Self {
        Self {
            route: Signal::new(initial.to_string()),
            params: Signal::new(HashMap::new()),
        }
    }

    pub fn current_route(&self) -> String {
        self.route.read().clone()
    }

    /// The navigation-time parameter bag, as last replaced by `navigate`.
    #[allow(dead_code)]
    pub fn params(&self) -> HashMap<String, String> {
        self.params.read().clone()
    }

    /// Atomically replace the current route. The parameter bag is replaced
    /// only when `params` is given; otherwise it is left untouched.
    /// Navigating to the path already current is a no-op for route
    /// watchers.
    pub fn navigate(&mut self, path: &str, params: Option<HashMap<String, String>>) {
        if let Some(params) = params {
            self.params.set(params);
        }
        if *self.route.read() != path {
            tracing::debug!(to = path, "navigate");
            self.route.set(path.to_string());
        }
    }
}

/// Hook to access the navigation store.
pub fn use_nav() -> NavState {
    use_context::<NavState>()
}
