use super::*;
use crate::state::session::SessionState;
use crate::util::token_store::TokenStore;
use futures::executor::block_on;

#[test]
fn build_session_uses_configured_cookie_and_base_url() {
    let config = AppConfig::from_values(Some("https://api.example.test/"), None, Some("adminToken")).unwrap();
    let session = build_session(&config);
    assert_eq!(session.store().name(), "adminToken");
    assert_eq!(session.api().base_url(), "https://api.example.test");
    assert!(session.loading());
}

#[test]
fn native_session_settles_signed_out_without_network() {
    let session = build_session(&AppConfig::default());
    assert_eq!(session.store().get_token(), None);
    block_on(session.init());
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(session.error(), None);
}
