//! Routes
//!
//! The views reachable from the navigation shell, keyed by their canonical path.

use serde::{Deserialize, Serialize};

/// Application routes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Landing page
    #[default]
    Landing,
    /// Feature overview
    Features,
    /// Company/vision page
    About,
    /// Sign-in form
    Login,
    /// Account creation form
    SignUp,
}

impl Route {
    /// Canonical path for the route
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Features => "/features",
            Route::About => "/about",
            Route::Login => "/login",
            Route::SignUp => "/signup",
        }
    }

    /// Exact path lookup, no prefix matching
    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|route| route.path() == path)
    }

    /// Translation key (within the `nav` namespace)
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Landing => "home",
            Route::Features => "features",
            Route::About => "about",
            Route::Login => "login",
            Route::SignUp => "signup",
        }
    }

    pub fn all() -> &'static [Route] {
        &[
            Route::Landing,
            Route::Features,
            Route::About,
            Route::Login,
            Route::SignUp,
        ]
    }

    /// Routes shown as text links in the navbar
    pub fn nav_links() -> &'static [Route] {
        &[Route::Landing, Route::Features, Route::About]
    }
}

/// Whether a link targeting `target_path` is the active one for `current_path`
pub fn is_active_path(current_path: &str, target_path: &str) -> bool {
    current_path == target_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn unknown_paths_have_no_route() {
        assert_eq!(Route::from_path("/feature"), None);
        assert_eq!(Route::from_path("/features/"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn highlighter_uses_exact_match() {
        assert!(is_active_path("/features", "/features"));
        assert!(!is_active_path("/features", "/feature"));
        assert!(!is_active_path("/features", "/"));
        assert!(!is_active_path("/", "/features"));
        assert!(is_active_path("/", "/"));
    }
}
