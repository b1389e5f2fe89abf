//! Login page: email + password against the session context.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::net::types::ApiError;
use crate::util::route_guard::{DASHBOARD_ROUTE, Page};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Trim and check an email address (`something@host.tld`).
pub(crate) fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !looks_like_email(email) {
        return Err("Email is invalid");
    }
    Ok(email.to_owned())
}

/// Passwords are taken verbatim; only the length is checked.
pub(crate) fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.find('.').is_some_and(|dot| dot > 0 && dot + 1 < domain.len())
}

/// Validate the login form, returning the trimmed email and the password.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email(email)?;
    validate_password(password)?;
    Ok((email, password.to_owned()))
}

/// Message shown under the form when sign-in fails.
pub fn login_error_message(err: &ApiError) -> String {
    err.user_message().unwrap_or(INVALID_CREDENTIALS).to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(()) => {
                    busy.set(false);
                    navigate(DASHBOARD_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    log::info!("login failed: {e}");
                    info.set(login_error_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Balosh Blog"</h1>
                <p class="login-card__subtitle">"Welcome back! Please sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href=Page::Register.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
