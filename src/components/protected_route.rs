//! Route wrappers that gate their children on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page is wrapped in [`ProtectedRoute`]; login and register are
//! wrapped in [`PublicRoute`]. Both re-evaluate on each snapshot change, so a
//! logout anywhere unmounts protected views immediately.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionSnapshot, SessionState};
use crate::util::route_guard::{
    GuardDecision, decide, decide_public, install_auth_redirect, install_unauth_redirect,
};

/// Text shown in place of a guarded route that is not rendering yet.
pub fn placeholder_text(state: &SessionState) -> &'static str {
    match state {
        SessionState::Loading => "Loading...",
        SessionState::Unauthenticated | SessionState::Authenticated(_) => "Redirecting...",
    }
}

fn renders(decision: GuardDecision<'_>) -> bool {
    matches!(decision, GuardDecision::Render(_))
}

#[component]
fn GuardPlaceholder(session: RwSignal<SessionSnapshot>) -> impl IntoView {
    view! {
        <div class="route-guard">
            <p class="route-guard__message">{move || session.with(|s| placeholder_text(&s.state))}</p>
        </div>
    }
}

/// Renders `children` only for a signed-in user; redirects to login otherwise.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(|s| renders(decide(&s.state)))
            fallback=move || view! { <GuardPlaceholder session=session/> }
        >
            {children()}
        </Show>
    }
}

/// Renders `children` only for a signed-out user; signed-in users go to the
/// dashboard.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    install_auth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(|s| renders(decide_public(&s.state)))
            fallback=move || view! { <GuardPlaceholder session=session/> }
        >
            {children()}
        </Show>
    }
}
