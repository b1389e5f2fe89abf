use super::*;
use chrono::TimeZone;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap()
}

fn wire_user() -> ProfileUser {
    ProfileUser {
        id: "1".to_owned(),
        username: "jd".to_owned(),
        first_name: "J".to_owned(),
        last_name: "D".to_owned(),
        email: "j@d.com".to_owned(),
        bio: None,
        profile_photo: None,
        created_at: None,
        updated_at: Some("2024-04-01T00:00:00.000Z".to_owned()),
    }
}

fn profile() -> SessionProfile {
    SessionProfile::from_wire(wire_user(), now())
}

// =============================================================
// SessionProfile
// =============================================================

#[test]
fn from_wire_fills_defaults() {
    let profile = profile();
    assert_eq!(profile.id, "1");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.role, ADMIN_ROLE);
    assert_eq!(profile.created_at, "2024-05-01T12:00:00.000Z");
    assert_eq!(profile.updated_at, "2024-04-01T00:00:00.000Z");
}

#[test]
fn from_wire_drops_empty_photo() {
    let user = ProfileUser { profile_photo: Some(String::new()), ..wire_user() };
    assert_eq!(SessionProfile::from_wire(user, now()).profile_photo, None);
}

#[test]
fn display_name_joins_name_parts() {
    assert_eq!(profile().display_name(), "J D");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = ProfileUser { first_name: " ".to_owned(), last_name: String::new(), ..wire_user() };
    assert_eq!(SessionProfile::from_wire(user, now()).display_name(), "jd");
}

#[test]
fn initials_take_first_two_words() {
    let user = ProfileUser { first_name: "ada".to_owned(), last_name: "king lovelace".to_owned(), ..wire_user() };
    assert_eq!(SessionProfile::from_wire(user, now()).initials(), "AK");
}

// =============================================================
// SessionState / SessionSnapshot
// =============================================================

#[test]
fn default_snapshot_is_loading_without_error() {
    let snapshot = SessionSnapshot::default();
    assert!(snapshot.loading());
    assert!(!snapshot.is_authenticated());
    assert!(snapshot.user().is_none());
    assert!(snapshot.error().is_none());
}

#[test]
fn blocking_fetch_clears_error_and_shows_loading() {
    let mut snapshot = SessionSnapshot { state: SessionState::Unauthenticated, error: Some("old".to_owned()) };
    snapshot.begin_blocking_fetch();
    assert_eq!(snapshot, SessionSnapshot::default());
}

#[test]
fn blocking_success_authenticates() {
    let mut snapshot = SessionSnapshot::default();
    snapshot.apply_blocking_result(Some(profile()));
    assert_eq!(snapshot.user().map(|u| u.id.as_str()), Some("1"));
    assert!(snapshot.error().is_none());
}

#[test]
fn blocking_failure_fails_closed() {
    let mut snapshot = SessionSnapshot { state: SessionState::Authenticated(profile()), error: None };
    snapshot.apply_blocking_result(None);
    assert_eq!(snapshot.state, SessionState::Unauthenticated);
    assert_eq!(snapshot.error(), Some(FETCH_USER_FAILED));
}

#[test]
fn silent_success_replaces_profile_but_not_error() {
    let mut snapshot = SessionSnapshot { state: SessionState::Authenticated(profile()), error: Some("kept".to_owned()) };
    let renamed = SessionProfile { username: "jdoe".to_owned(), ..profile() };
    snapshot.apply_silent_result(renamed.clone());
    assert_eq!(snapshot.user(), Some(&renamed));
    assert_eq!(snapshot.error(), Some("kept"));
}

#[test]
fn clear_resets_to_unauthenticated() {
    let mut snapshot = SessionSnapshot { state: SessionState::Authenticated(profile()), error: Some("x".to_owned()) };
    snapshot.clear();
    assert_eq!(snapshot, SessionSnapshot { state: SessionState::Unauthenticated, error: None });
}
