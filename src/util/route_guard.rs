//! Route protection decisions and the effects that apply them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component asks the same questions of the session: wait, bounce,
//! or render. The answers live here as pure functions over [`SessionState`] so
//! they are covered without a browser; the Leptos effects at the bottom only
//! wire those answers to the router.
//!
//! DESIGN
//! ======
//! `Loading` never redirects. A protected view is only mounted once a profile
//! is present, and a redirect is only issued once the session has settled.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionProfile, SessionSnapshot, SessionState};

/// Where signed-out users are sent.
pub const LOGIN_ROUTE: &str = "/";

/// Landing page for signed-in users.
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";

/// First path segment shared by every protected page.
pub const ADMIN_SEGMENT: &str = "admin";

/// Outcome of checking a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision<'a> {
    /// Session still resolving; show a neutral placeholder, mount nothing.
    Placeholder,
    Redirect(&'static str),
    /// Mount the route. Protected routes carry the signed-in profile.
    Render(Option<&'a SessionProfile>),
}

/// Decision for a route that requires a signed-in user.
pub fn decide(state: &SessionState) -> GuardDecision<'_> {
    match state {
        SessionState::Loading => GuardDecision::Placeholder,
        SessionState::Unauthenticated => GuardDecision::Redirect(LOGIN_ROUTE),
        SessionState::Authenticated(profile) => GuardDecision::Render(Some(profile)),
    }
}

/// Decision for a route only signed-out users should see (login, register).
pub fn decide_public(state: &SessionState) -> GuardDecision<'_> {
    match state {
        SessionState::Loading => GuardDecision::Placeholder,
        SessionState::Unauthenticated => GuardDecision::Render(None),
        SessionState::Authenticated(_) => GuardDecision::Redirect(DASHBOARD_ROUTE),
    }
}

/// Redirect target for a protected route, if any.
pub fn redirect_target(state: &SessionState) -> Option<&'static str> {
    match decide(state) {
        GuardDecision::Redirect(target) => Some(target),
        GuardDecision::Placeholder | GuardDecision::Render(_) => None,
    }
}

/// Redirect target for a public route, if any.
pub fn public_redirect_target(state: &SessionState) -> Option<&'static str> {
    match decide_public(state) {
        GuardDecision::Redirect(target) => Some(target),
        GuardDecision::Placeholder | GuardDecision::Render(_) => None,
    }
}

// =============================================================
// Route table
// =============================================================

/// Who may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed-out users only.
    Public,
    /// Everyone, regardless of session.
    Open,
    /// Signed-in users only.
    Protected,
}

/// Every screen the router can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    AccessDenied,
    Dashboard,
    NewBlog,
    AllBlogs,
    Categories,
    Settings,
}

impl Page {
    pub const ALL: [Self; 8] = [
        Self::Login,
        Self::Register,
        Self::AccessDenied,
        Self::Dashboard,
        Self::NewBlog,
        Self::AllBlogs,
        Self::Categories,
        Self::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_ROUTE,
            Self::Register => "/register",
            Self::AccessDenied => "/access-denied",
            Self::Dashboard => DASHBOARD_ROUTE,
            Self::NewBlog => "/admin/new-blog",
            Self::AllBlogs => "/admin/all-blogs",
            Self::Categories => "/admin/categories",
            Self::Settings => "/admin/settings",
        }
    }

    /// Last path segment, as handed to the router. Protected pages sit under
    /// [`ADMIN_SEGMENT`]; the rest hang off the root.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Login => "",
            Self::Register => "register",
            Self::AccessDenied => "access-denied",
            Self::Dashboard => "dashboard",
            Self::NewBlog => "new-blog",
            Self::AllBlogs => "all-blogs",
            Self::Categories => "categories",
            Self::Settings => "settings",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Register => Access::Public,
            Self::AccessDenied => Access::Open,
            Self::Dashboard | Self::NewBlog | Self::AllBlogs | Self::Categories | Self::Settings => {
                Access::Protected
            }
        }
    }

    /// Page mounted at `path`, ignoring trailing slashes.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// What the router should do for a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Show(Page),
    Placeholder,
    Redirect(&'static str),
    NotFound,
}

/// Resolve `path` against the route table and the current session.
pub fn resolve(path: &str, state: &SessionState) -> Navigation {
    let path = normalize_path(path);
    if path == "/admin" {
        return match decide(state) {
            GuardDecision::Render(_) => Navigation::Redirect(DASHBOARD_ROUTE),
            other => navigation_for(other, Page::Dashboard),
        };
    }
    let Some(page) = Page::from_path(path) else {
        return Navigation::NotFound;
    };
    match page.access() {
        Access::Open => Navigation::Show(page),
        Access::Public => navigation_for(decide_public(state), page),
        Access::Protected => navigation_for(decide(state), page),
    }
}

fn navigation_for(decision: GuardDecision<'_>, page: Page) -> Navigation {
    match decision {
        GuardDecision::Placeholder => Navigation::Placeholder,
        GuardDecision::Redirect(target) => Navigation::Redirect(target),
        GuardDecision::Render(_) => Navigation::Show(page),
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

// =============================================================
// Effects
// =============================================================

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Send the user to the login page whenever the session settles signed out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = session.with(|snapshot| redirect_target(&snapshot.state)) {
            log::debug!("route guard: redirecting to {target}");
            navigate(target, replace_history());
        }
    });
}

/// Send signed-in users away from login/register to the dashboard.
pub fn install_auth_redirect<F>(session: RwSignal<SessionSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = session.with(|snapshot| public_redirect_target(&snapshot.state)) {
            navigate(target, replace_history());
        }
    });
}
