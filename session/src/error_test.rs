use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn bad_request_surfaces_server_message_verbatim() {
    let err = AuthError::from_status(Operation::Login, 400, Some("Email is required".to_owned()));
    assert_eq!(err, AuthError::Validation("Email is required".to_owned()));
    assert_eq!(err.to_string(), "Email is required");
}

#[test]
fn conflict_on_register_is_a_validation_error() {
    let err = AuthError::from_status(Operation::Register, 409, Some("Email already exists".to_owned()));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Email already exists");
}

#[test]
fn validation_without_message_falls_back_to_operation_label() {
    let err = AuthError::from_status(Operation::Register, 400, None);
    assert_eq!(err.to_string(), "Registration failed");
}

#[test]
fn login_unauthorized_uses_server_message() {
    let err = AuthError::from_status(Operation::Login, 401, Some("Invalid credentials".to_owned()));
    assert_eq!(err, AuthError::Auth("Invalid credentials".to_owned()));
}

#[test]
fn login_unauthorized_without_message_uses_credential_default() {
    let err = AuthError::from_status(Operation::Login, 401, Some("   ".to_owned()));
    assert_eq!(err.to_string(), INVALID_CREDENTIALS_MESSAGE);
}

#[test]
fn disabled_account_message_is_distinct_but_same_kind() {
    let disabled = AuthError::from_status(
        Operation::Login,
        401,
        Some("Account is disabled. Please contact support.".to_owned()),
    );
    let wrong = AuthError::from_status(Operation::Login, 401, None);
    assert_eq!(disabled.kind(), wrong.kind());
    assert_ne!(disabled.to_string(), wrong.to_string());
}

#[test]
fn profile_unauthorized_reads_session_expired() {
    let err = AuthError::from_status(Operation::Profile, 401, Some("jwt expired".to_owned()));
    assert_eq!(err, AuthError::Auth(SESSION_EXPIRED_MESSAGE.to_owned()));
}

#[test]
fn server_error_prefers_server_message() {
    let err = AuthError::from_status(
        Operation::Login,
        500,
        Some("Login failed. Please try again later.".to_owned()),
    );
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.to_string(), "Login failed. Please try again later.");
}

#[test]
fn server_error_without_message_is_retryable_try_again() {
    let err = AuthError::from_status(Operation::Register, 503, None);
    assert_eq!(err.to_string(), "Registration failed. Please try again later.");
    assert!(err.is_retryable());
}

#[test]
fn unexpected_status_maps_to_server() {
    let err = AuthError::from_status(Operation::Profile, 404, None);
    assert_eq!(err.kind(), ErrorKind::Server);
}

// =============================================================
// Classification helpers
// =============================================================

#[test]
fn network_error_has_connectivity_message() {
    let err = AuthError::network();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.to_string(), NETWORK_MESSAGE);
    assert!(err.is_retryable());
}

#[test]
fn credential_and_validation_errors_are_not_retryable() {
    assert!(!AuthError::Auth("x".to_owned()).is_retryable());
    assert!(!AuthError::Validation("x".to_owned()).is_retryable());
}

#[test]
fn superseded_is_never_user_visible() {
    assert!(!AuthError::Superseded.is_user_visible());
    assert!(AuthError::Busy.is_user_visible());
    assert!(AuthError::network().is_user_visible());
}
