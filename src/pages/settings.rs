//! Profile settings page.
//!
//! DESIGN
//! ======
//! Only fields that differ from the cached profile are sent. After a save the
//! session refreshes silently, so the header picks up the new name without a
//! loading flash.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::login::validate_email;
use crate::app::AppSession;
use crate::net::types::{ApiError, ProfileUpdate};
use crate::state::session::{SessionProfile, SessionSnapshot};

/// Editable copy of the profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub remove_photo: bool,
}

impl ProfileForm {
    pub fn from_profile(profile: &SessionProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            username: profile.username.clone(),
            email: profile.email.clone(),
            bio: profile.bio.clone(),
            remove_photo: false,
        }
    }
}

/// Check the fields the server requires.
pub fn validate_profile_form(form: &ProfileForm) -> Result<(), &'static str> {
    if form.first_name.trim().is_empty() {
        return Err("First name is required");
    }
    if form.username.trim().chars().count() < 3 {
        return Err("Username must be at least 3 characters");
    }
    validate_email(&form.email)?;
    Ok(())
}

fn changed(current: &str, edited: &str) -> Option<String> {
    let edited = edited.trim();
    (edited != current).then(|| edited.to_owned())
}

/// Fields of `form` that differ from `current`, trimmed.
pub fn profile_changes(current: &SessionProfile, form: &ProfileForm) -> ProfileUpdate {
    ProfileUpdate {
        first_name: changed(&current.first_name, &form.first_name),
        last_name: changed(&current.last_name, &form.last_name),
        display_name: None,
        username: changed(&current.username, &form.username),
        bio: changed(&current.bio, &form.bio),
        email: changed(&current.email, &form.email),
        profile_photo: (form.remove_photo && current.profile_photo.is_some()).then_some(None),
    }
}

pub fn save_error_message(err: &ApiError) -> String {
    err.user_message().unwrap_or("Failed to update profile").to_owned()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let initial = snapshot.with_untracked(|s| s.user().map(ProfileForm::from_profile).unwrap_or_default());
    let form = RwSignal::new(initial);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = snapshot.with(|s| s.user().cloned()) else {
            return;
        };
        let edited = form.get();
        if let Err(message) = validate_profile_form(&edited) {
            info.set(message.to_owned());
            return;
        }
        let update = profile_changes(&current, &edited);
        if update.is_empty() {
            info.set("No changes to save".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.update_profile(&update).await {
                Ok(()) => {
                    info.set("Profile updated".to_owned());
                    form.update(|f| f.remove_photo = false);
                }
                Err(e) => {
                    log::warn!("settings: save failed: {e}");
                    info.set(save_error_message(&e));
                }
            }
            busy.set(false);
        });
    };

    let text_field = move |label: &'static str, get: fn(&ProfileForm) -> &String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="settings-field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <form class="settings-form" on:submit=on_save>
                {text_field("First Name", |f| &f.first_name, |f, v| f.first_name = v)}
                {text_field("Last Name", |f| &f.last_name, |f, v| f.last_name = v)}
                {text_field("Username", |f| &f.username, |f, v| f.username = v)}
                {text_field("Email", |f| &f.email, |f, v| f.email = v)}
                <label class="settings-field">
                    <span>"Bio"</span>
                    <textarea
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.bio = value);
                        }
                    ></textarea>
                </label>
                <Show when=move || snapshot.with(|s| s.user().is_some_and(|u| u.profile_photo.is_some()))>
                    <label class="settings-field settings-field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.remove_photo)
                            on:change=move |ev| form.update(|f| f.remove_photo = event_target_checked(&ev))
                        />
                        <span>"Remove profile photo"</span>
                    </label>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="settings-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
