//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! One [`AppSession`] is built here and shared through Leptos context. A
//! session listener mirrors every snapshot into an `RwSignal`, which is what
//! route guards and components subscribe to reactively.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::protected_route::{ProtectedRoute, PublicRoute};
use crate::config::AppConfig;
use crate::net::api::HttpApi;
use crate::pages::content::{AllBlogsPage, CategoriesPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::fallback::{AccessDeniedPage, NotFoundPage};
use crate::pages::login::LoginPage;
use crate::pages::new_blog::NewBlogPage;
use crate::pages::register::RegisterPage;
use crate::pages::settings::SettingsPage;
use crate::state::session_context::SessionContext;
use crate::util::route_guard::{ADMIN_SEGMENT, Page};
use crate::util::token_store::CookieTokenStore;

/// Session handle used by the browser app.
pub type AppSession = SessionContext<CookieTokenStore, HttpApi>;

/// Build the session for `config`.
pub fn build_session(config: &AppConfig) -> AppSession {
    SessionContext::new(
        CookieTokenStore::new(config.token_cookie.clone(), config.token_ttl),
        HttpApi::new(config.api_base_url.clone()),
    )
}

/// Load configuration, falling back to defaults when the build environment
/// carries a bad value.
pub fn load_config() -> AppConfig {
    AppConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("config: {err}; using defaults");
        AppConfig::default()
    })
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let session = build_session(&config);
    let snapshot = RwSignal::new(session.snapshot());
    session.subscribe(move |next| {
        let _ = snapshot.try_set(next.clone());
    });

    provide_context(config);
    provide_context(snapshot);
    provide_context(session.clone());

    leptos::task::spawn_local(async move { session.init().await });

    view! {
        <Title text="Balosh Blog Admin"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment(Page::Login.segment())
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment(Page::Register.segment())
                    view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                />
                <Route path=StaticSegment(Page::AccessDenied.segment()) view=AccessDeniedPage/>
                <Route
                    path=StaticSegment(ADMIN_SEGMENT)
                    view=|| view! { <ProtectedRoute><Redirect path=Page::Dashboard.path()/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(ADMIN_SEGMENT), StaticSegment(Page::Dashboard.segment()))
                    view=|| view! { <ProtectedRoute><AdminLayout><DashboardPage/></AdminLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(ADMIN_SEGMENT), StaticSegment(Page::NewBlog.segment()))
                    view=|| view! { <ProtectedRoute><AdminLayout><NewBlogPage/></AdminLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(ADMIN_SEGMENT), StaticSegment(Page::AllBlogs.segment()))
                    view=|| view! { <ProtectedRoute><AdminLayout><AllBlogsPage/></AdminLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(ADMIN_SEGMENT), StaticSegment(Page::Categories.segment()))
                    view=|| view! { <ProtectedRoute><AdminLayout><CategoriesPage/></AdminLayout></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment(ADMIN_SEGMENT), StaticSegment(Page::Settings.segment()))
                    view=|| view! { <ProtectedRoute><AdminLayout><SettingsPage/></AdminLayout></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
