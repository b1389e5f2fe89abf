//! Not-found and access-denied screens.

use leptos::prelude::*;

use crate::util::route_guard::{DASHBOARD_ROUTE, LOGIN_ROUTE};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href=DASHBOARD_ROUTE>"Back to Dashboard"</a>
        </div>
    }
}

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    view! {
        <div class="fallback-page">
            <h1>"Access Denied"</h1>
            <p>"You do not have permission to view this page."</p>
            <a class="btn btn--primary" href=LOGIN_ROUTE>"Back to Login"</a>
        </div>
    }
}
