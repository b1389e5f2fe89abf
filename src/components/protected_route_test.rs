use super::*;

#[test]
fn placeholder_text_while_loading() {
    assert_eq!(placeholder_text(&SessionState::Loading), "Loading...");
}

#[test]
fn placeholder_text_once_settled() {
    assert_eq!(placeholder_text(&SessionState::Unauthenticated), "Redirecting...");
}

#[test]
fn renders_only_on_render_decision() {
    assert!(!renders(decide(&SessionState::Loading)));
    assert!(!renders(decide(&SessionState::Unauthenticated)));
    assert!(renders(decide_public(&SessionState::Unauthenticated)));
}
