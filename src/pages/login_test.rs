use super::*;

#[test]
fn validate_login_input_trims_email_but_not_password() {
    assert_eq!(
        validate_login_input("  alice@example.com ", " secret "),
        Ok(LoginRequest { email: "alice@example.com".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@x.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    for email in ["alice", "@x.com", "alice@", "alice@localhost", "alice@.com", "alice@x."] {
        assert_eq!(validate_login_input(email, "pw"), Err("Enter a valid email address."), "{email}");
    }
}
