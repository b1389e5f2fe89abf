use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com ", "secret1"),
        Ok(("user@example.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret1"), Err("Email is required"));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("user@example", "secret1"), Err("Email is invalid"));
    assert_eq!(validate_login_input("@example.com", "secret1"), Err("Email is invalid"));
    assert_eq!(validate_login_input("us er@example.com", "secret1"), Err("Email is invalid"));
    assert_eq!(validate_login_input("user@.com", "secret1"), Err("Email is invalid"));
}

#[test]
fn validate_login_input_checks_password_length() {
    assert_eq!(validate_login_input("a@b.co", ""), Err("Password is required"));
    assert_eq!(validate_login_input("a@b.co", "12345"), Err("Password must be at least 6 characters"));
    assert!(validate_login_input("a@b.co", "123456").is_ok());
}

#[test]
fn login_error_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: "Account locked".to_owned() };
    assert_eq!(login_error_message(&err), "Account locked");
}

#[test]
fn login_error_message_falls_back_for_opaque_errors() {
    assert_eq!(login_error_message(&ApiError::Unauthorized { status: 401 }), INVALID_CREDENTIALS);
    assert_eq!(login_error_message(&ApiError::Request("offline".to_owned())), INVALID_CREDENTIALS);
}
