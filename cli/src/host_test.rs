use super::*;

#[test]
fn success_notice_prints_bare_message() {
    assert_eq!(render_notice(&Notice::success("Welcome back!")), "Welcome back!");
}

#[test]
fn error_notice_is_prefixed() {
    assert_eq!(
        render_notice(&Notice::error("Invalid email or password")),
        "error: Invalid email or password"
    );
}
