//! Route table
//!
//! The app has a closed set of top-level pages. Every page the router can show
//! is a variant of [`AppRoute`], and the mapping from variant to component lives
//! in [`crate::pages::route_view`] as an exhaustive `match`.

/// A top-level page of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    About,
    MyPension,
    Contribute,
    Register,
}

impl AppRoute {
    /// All routes, in navigation order.
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::About,
        AppRoute::MyPension,
        AppRoute::Contribute,
        AppRoute::Register,
    ];

    /// Canonical path of the route.
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::About => "/about",
            AppRoute::MyPension => "/mypension",
            AppRoute::Contribute => "/contribute",
            AppRoute::Register => "/register",
        }
    }

    /// Label used for navigation links.
    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::About => "About",
            AppRoute::MyPension => "My Pension",
            AppRoute::Contribute => "Contribute",
            AppRoute::Register => "Register",
        }
    }

    /// Resolve a location pathname to a route.
    ///
    /// Matching is case-insensitive and ignores trailing slashes, a query
    /// string and a fragment. Nested paths never match: there are no child
    /// routes and no catch-all.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        AppRoute::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(normalized))
    }
}
