use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  jane@example.com ", " secret "),
        Ok(("jane@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("jane@example.com", ""), Err("Enter your email and password."));
}
