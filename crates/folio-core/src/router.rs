//! Client-side routes

use std::fmt::{self, Display, Formatter};

/// Top-level pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page with the section layout
    #[default]
    Home,
    /// Bio
    About,
    /// Project gallery
    Portfolio,
    /// Contact form
    Contact,
}

impl Route {
    /// All routes in navbar order
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Portfolio, Route::Contact];

    /// URL path
    #[inline]
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Portfolio => "/portfolio",
            Route::Contact => "/contact",
        }
    }

    /// Navbar label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Portfolio => "Portfolio",
            Route::Contact => "Contact",
        }
    }

    /// Resolve a path; a trailing slash is ignored
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Current-page tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Router on the home page
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page
    #[inline]
    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Whether the link for `route` is highlighted
    #[inline]
    #[must_use]
    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }

    /// Switch page; returns `true` if the page changed
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        tracing::info!(from = %self.current, to = %route, "route change");
        self.current = route;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/portfolio/"), Some(Route::Portfolio));
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn navigate_reports_change() {
        let mut router = Router::new();
        assert!(router.is_active(Route::Home));
        assert!(router.navigate(Route::Contact));
        assert!(!router.navigate(Route::Contact));
        assert!(router.is_active(Route::Contact));
    }
}
