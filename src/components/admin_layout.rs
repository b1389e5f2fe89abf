//! Admin chrome: navigation, signed-in user, logout.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppSession;
use crate::state::session::{SessionProfile, SessionSnapshot};
use crate::util::route_guard::{LOGIN_ROUTE, Page};

/// Sidebar entries in display order.
pub const NAV_ITEMS: [(Page, &str); 5] = [
    (Page::Dashboard, "Dashboard"),
    (Page::NewBlog, "New Blog"),
    (Page::AllBlogs, "All Blogs"),
    (Page::Categories, "Categories"),
    (Page::Settings, "Settings"),
];

/// CSS class for a nav entry given the current pathname.
pub fn nav_item_class(pathname: &str, page: Page) -> &'static str {
    if Page::from_path(pathname) == Some(page) {
        "admin-nav__item admin-nav__item--active"
    } else {
        "admin-nav__item"
    }
}

/// Name shown in the header; empty while nobody is signed in.
pub fn header_name(snapshot: &SessionSnapshot) -> String {
    snapshot.user().map(SessionProfile::display_name).unwrap_or_default()
}

/// Layout wrapping every protected page.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    let nav = NAV_ITEMS
        .into_iter()
        .map(move |(page, label)| {
            let class = move || pathname.with(|path| nav_item_class(path, page));
            view! {
                <a class=class href=page.path()>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="admin-layout">
            <aside class="admin-nav">
                <h1 class="admin-nav__title">"Balosh Blog"</h1>
                <nav>{nav}</nav>
                <button class="admin-nav__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>
            <div class="admin-layout__body">
                <header class="admin-header">
                    <span class="admin-header__avatar">
                        {move || snapshot.with(|s| s.user().map(SessionProfile::initials).unwrap_or_default())}
                    </span>
                    <span class="admin-header__name">{move || snapshot.with(header_name)}</span>
                </header>
                <main class="admin-layout__content">{children()}</main>
            </div>
        </div>
    }
}
