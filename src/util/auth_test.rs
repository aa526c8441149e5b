use super::*;
use crate::test_support::{Harness, alice, credentials, token_with_claims};
use crate::util::credential_store::StoredFields;

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_all_fields() {
    let h = Harness::new();
    h.auth.login(&alice()).unwrap();
    assert_eq!(h.auth.stored_session(), Some(alice()));
}

#[test]
fn login_fails_when_storage_unavailable() {
    let h = Harness::new();
    h.store.set_available(false);
    assert!(h.auth.login(&alice()).is_err());
    assert_eq!(h.auth.stored_session(), None);
}

#[test]
fn remember_persists_with_custom_expiry() {
    let h = Harness::new();
    h.auth.remember(&alice(), Duration::from_secs(3600)).unwrap();
    assert_eq!(h.auth.stored_session(), Some(alice()));
}

#[test]
fn logout_clears_then_navigates_to_login() {
    let h = Harness::new();
    h.auth.login(&alice()).unwrap();
    h.auth.logout();
    assert_eq!(h.store.read(), StoredFields::default());
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn logout_twice_matches_logout_once() {
    let h = Harness::new();
    h.auth.login(&alice()).unwrap();
    h.auth.logout();
    let after_once = h.store.read();
    h.auth.logout();
    assert_eq!(h.store.read(), after_once);
    assert!(h.navigator.visits().iter().all(|p| p == "/login"));
}

#[test]
fn forget_clears_without_navigation() {
    let h = Harness::new();
    h.auth.login(&alice()).unwrap();
    h.auth.forget();
    assert_eq!(h.auth.stored_session(), None);
    assert!(h.navigator.visits().is_empty());
}

// =============================================================
// is_authenticated_at
// =============================================================

#[test]
fn no_token_is_not_authenticated_and_does_not_navigate() {
    let h = Harness::new();
    assert!(!h.auth.is_authenticated_at(0.0));
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn malformed_tokens_fail_closed_and_log_out() {
    let bad_tokens = [
        "t1".to_owned(),
        "a.b".to_owned(),
        "x.y.z.w".to_owned(),
        "a..c".to_owned(),
        "a.!!!.c".to_owned(),
        // "not json"
        "a.bm90IGpzb24.c".to_owned(),
        // bytes ff fe: not UTF-8
        "a.__4.c".to_owned(),
        format!(" {} ", token_with_claims(r#"{"exp":1}"#)).replacen('.', ". ", 1),
        token_with_claims("[99999999999]"),
        token_with_claims("42"),
        token_with_claims(r#""claims""#),
        token_with_claims("null"),
        token_with_claims(r#"{"exp":"tomorrow"}"#),
        token_with_claims(r#"{"exp":[1]}"#),
    ];
    for bad in &bad_tokens {
        let h = Harness::new();
        h.auth.login(&credentials(bad, Role::Student, "alice", "a@x.com")).unwrap();
        assert!(!h.auth.is_authenticated_at(0.0), "{bad:?}");
        assert_eq!(h.auth.stored_session(), None, "{bad:?}");
        assert_eq!(h.navigator.visits(), vec!["/login".to_owned()], "{bad:?}");
    }
}

#[test]
fn whitespace_around_token_does_not_hide_expiry() {
    let h = Harness::new();
    let token = format!(" {} ", token_with_claims(r#"{"exp":1}"#));
    h.auth.login(&credentials(&token, Role::Student, "alice", "a@x.com")).unwrap();
    assert!(!h.auth.is_authenticated_at(1000.0));
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn token_without_exp_never_expires() {
    let h = Harness::new();
    let token = token_with_claims(r#"{"sub":"alice"}"#);
    h.auth.login(&credentials(&token, Role::Student, "alice", "a@x.com")).unwrap();
    assert!(h.auth.is_authenticated_at(0.0));
    assert!(h.auth.is_authenticated_at(1.0e15));
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn expiry_boundary() {
    let exp = 1_700_000_000_u64;
    let token = token_with_claims(&format!(r#"{{"exp":{exp}}}"#));
    #[allow(clippy::cast_precision_loss)]
    let exp_ms = (exp * 1000) as f64;

    let h = Harness::new();
    h.auth.login(&credentials(&token, Role::Admin, "root", "r@x.com")).unwrap();
    assert!(h.auth.is_authenticated_at(exp_ms - 1.0));
    assert!(h.navigator.visits().is_empty());

    assert!(!h.auth.is_authenticated_at(exp_ms));
    assert_eq!(h.auth.stored_session(), None);
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn future_exp_against_wall_clock_is_authenticated() {
    let h = Harness::new();
    let token = token_with_claims(r#"{"exp":99999999999}"#);
    h.auth.login(&credentials(&token, Role::Student, "alice", "a@x.com")).unwrap();
    assert!(h.auth.is_authenticated());
}

// =============================================================
// check_auth_lite
// =============================================================

#[test]
fn lite_check_only_needs_token_presence() {
    let h = Harness::new();
    // Not decodable, but the lite check never decodes.
    h.auth.login(&alice()).unwrap();
    assert_eq!(h.auth.check_auth_lite(), LiteStatus { is_authenticated: true, role: Some(Role::Student) });
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn stored_token_ignores_empty_value() {
    let h = Harness::new();
    assert_eq!(h.auth.stored_token(), None);
    h.auth.login(&alice()).unwrap();
    assert_eq!(h.auth.stored_token().as_deref(), Some("t1"));
    h.auth.login(&credentials("", Role::Student, "alice", "a@x.com")).unwrap();
    assert_eq!(h.auth.stored_token(), None);
}

#[test]
fn lite_check_without_token() {
    let h = Harness::new();
    h.auth.login(&alice()).unwrap();
    h.store.remove(crate::util::credential_store::TOKEN_KEY);
    assert_eq!(h.auth.check_auth_lite(), LiteStatus { is_authenticated: false, role: None });
}
