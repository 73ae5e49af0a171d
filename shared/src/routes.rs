//! # Routes and Navigation Guard
//!
//! The client exposes a small set of views. Every navigation runs through
//! [`navigate`] before it lands. Static forwards (`/` to the game) apply
//! first, then [`guard`]:
//!
//! 1. protected route while logged out: redirect to [`Route::Login`]
//! 2. login/register while logged in: redirect to [`Route::Game`]
//! 3. anything else: proceed
//!
//! ```rust
//! use shared::routes::{navigate, Navigation, Route};
//!
//! assert_eq!(navigate(Route::Root, false), Navigation::Redirect(Route::Login));
//! assert_eq!(navigate(Route::Root, true), Navigation::Redirect(Route::Game));
//! assert_eq!(navigate(Route::Game, true), Navigation::Proceed);
//! ```

/// Client views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, always forwarded to the game
    Root,
    Login,
    Register,
    Game,
    Wallet,
    Statistics,
    /// Paged bet history
    Records,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Root,
            Route::Login,
            Route::Register,
            Route::Game,
            Route::Wallet,
            Route::Statistics,
            Route::Records,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Game => "/game",
            Route::Wallet => "/wallet",
            Route::Statistics => "/statistics",
            Route::Records => "/records",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Root => "Root",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Game => "Game",
            Route::Wallet => "Wallet",
            Route::Statistics => "Statistics",
            Route::Records => "Records",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Game | Route::Wallet | Route::Statistics | Route::Records
        )
    }

    /// Static forward applied before the guard runs.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Route::Root => Some(Route::Game),
            _ => None,
        }
    }
}

/// Guard verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

pub fn guard(to: Route, logged_in: bool) -> Navigation {
    if to.requires_auth() && !logged_in {
        Navigation::Redirect(Route::Login)
    } else if matches!(to, Route::Login | Route::Register) && logged_in {
        Navigation::Redirect(Route::Game)
    } else {
        Navigation::Proceed
    }
}

/// Decide a navigation to `to`, redirecting straight to the route that
/// finally accepts it.
pub fn navigate(to: Route, logged_in: bool) -> Navigation {
    let target = resolve_route(to, logged_in);
    if target == to {
        Navigation::Proceed
    } else {
        Navigation::Redirect(target)
    }
}

/// Follow static forwards and guard redirects until a route is accepted.
fn resolve_route(mut route: Route, logged_in: bool) -> Route {
    // Each redirect moves toward Login or Game, which accept in either state.
    for _ in 0..Route::all().len() {
        if let Some(forward) = route.redirect() {
            route = forward;
            continue;
        }
        match guard(route, logged_in) {
            Navigation::Proceed => return route,
            Navigation::Redirect(next) => route = next,
        }
    }
    route
}
