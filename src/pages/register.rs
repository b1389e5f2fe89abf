//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::{validate_email, validate_password};
use crate::app::AppSession;
use crate::net::types::{ApiError, NewAccount};
use crate::util::route_guard::{DASHBOARD_ROUTE, Page};

/// Trim the form and check every required field, first failure wins.
pub fn validate_new_account(form: &NewAccount) -> Result<NewAccount, &'static str> {
    let first_name = form.first_name.trim();
    if first_name.is_empty() {
        return Err("First name is required");
    }
    let last_name = form.last_name.trim();
    if last_name.is_empty() {
        return Err("Last name is required");
    }
    let username = form.username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters");
    }
    let email = validate_email(&form.email)?;
    validate_password(&form.password)?;
    Ok(NewAccount {
        email,
        password: form.password.clone(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        username: username.to_owned(),
        bio: form.bio.trim().to_owned(),
    })
}

pub fn register_error_message(err: &ApiError) -> String {
    err.user_message().unwrap_or("Failed to create account").to_owned()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let form = RwSignal::new(NewAccount::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let account = match form.with(validate_new_account) {
            Ok(account) => account,
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
            let result = session.register(&account).await;
            busy.set(false);
            match result {
                Ok(()) if session.is_authenticated() => navigate(DASHBOARD_ROUTE, NavigateOptions::default()),
                Ok(()) => info.set("Account created successfully. Please sign in.".to_owned()),
                Err(e) => info.set(register_error_message(&e)),
            }
        });
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&NewAccount) -> &String, set: fn(&mut NewAccount, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Balosh Blog"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    {field("First name", "text", |f| &f.first_name, |f, v| f.first_name = v)}
                    {field("Last name", "text", |f| &f.last_name, |f, v| f.last_name = v)}
                    {field("Username", "text", |f| &f.username, |f, v| f.username = v)}
                    {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                    <textarea
                        class="login-input"
                        placeholder="Tell readers about yourself"
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.bio = value);
                        }
                    ></textarea>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href=Page::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
