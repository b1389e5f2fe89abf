use super::*;
use crate::net::types::ProfileUser;
use chrono::Utc;

fn profile() -> SessionProfile {
    let user = ProfileUser {
        id: "1".to_owned(),
        username: "janedoe".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        bio: Some("Writer".to_owned()),
        profile_photo: Some("https://cdn.example.com/jane.png".to_owned()),
        created_at: None,
        updated_at: None,
    };
    SessionProfile::from_wire(user, Utc::now())
}

#[test]
fn unchanged_form_produces_empty_update() {
    let current = profile();
    let form = ProfileForm::from_profile(&current);
    assert!(profile_changes(&current, &form).is_empty());
}

#[test]
fn only_edited_fields_are_sent() {
    let current = profile();
    let form = ProfileForm { bio: "  Editor ".to_owned(), last_name: "Doe ".to_owned(), ..ProfileForm::from_profile(&current) };
    let update = profile_changes(&current, &form);
    assert_eq!(update, ProfileUpdate { bio: Some("Editor".to_owned()), ..ProfileUpdate::default() });
}

#[test]
fn remove_photo_sends_null_only_when_a_photo_exists() {
    let current = profile();
    let form = ProfileForm { remove_photo: true, ..ProfileForm::from_profile(&current) };
    assert_eq!(profile_changes(&current, &form).profile_photo, Some(None));

    let without_photo = SessionProfile { profile_photo: None, ..profile() };
    assert!(profile_changes(&without_photo, &form).is_empty());
}

#[test]
fn validate_profile_form_checks_required_fields() {
    let form = ProfileForm::from_profile(&profile());
    assert_eq!(validate_profile_form(&form), Ok(()));
    assert_eq!(
        validate_profile_form(&ProfileForm { first_name: " ".to_owned(), ..form.clone() }),
        Err("First name is required")
    );
    assert_eq!(
        validate_profile_form(&ProfileForm { email: "jane".to_owned(), ..form }),
        Err("Email is invalid")
    );
}

#[test]
fn save_error_message_falls_back() {
    assert_eq!(save_error_message(&ApiError::MissingToken), "Failed to update profile");
}
