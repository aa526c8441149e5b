use super::*;

// =============================================================
// format_cookie
// =============================================================

#[test]
fn login_cookie_is_flagged() {
    let opts = CookieOptions::login(Duration::from_secs(604_800));
    assert_eq!(
        format_cookie("role", "student", &opts),
        "role=student; Max-Age=604800; Path=/; Secure; SameSite=Strict"
    );
}

#[test]
fn remember_me_cookie_is_unflagged() {
    let opts = CookieOptions::remember_me(Duration::from_secs(60));
    assert_eq!(format_cookie("role", "admin", &opts), "role=admin; Max-Age=60; Path=/");
}

#[test]
fn cookie_value_is_percent_encoded() {
    let opts = CookieOptions::remember_me(Duration::from_secs(1));
    assert_eq!(format_cookie("email", "a b;c", &opts), "email=a%20b%3Bc; Max-Age=1; Path=/");
}

#[test]
fn expired_cookie_has_zero_max_age() {
    assert_eq!(format_expired_cookie("token"), "token=; Max-Age=0; Path=/");
}

// =============================================================
// find_cookie
// =============================================================

#[test]
fn find_cookie_picks_named_entry() {
    let raw = "theme=dark; token=abc.def.ghi; role=admin";
    assert_eq!(find_cookie(raw, "token"), Some("abc.def.ghi".to_owned()));
    assert_eq!(find_cookie(raw, "role"), Some("admin".to_owned()));
}

#[test]
fn find_cookie_decodes_value() {
    assert_eq!(find_cookie("email=a%40x.com", "email"), Some("a@x.com".to_owned()));
}

#[test]
fn find_cookie_keeps_padding_in_value() {
    assert_eq!(find_cookie("token=abc==", "token"), Some("abc==".to_owned()));
}

#[test]
fn find_cookie_missing_or_empty_is_none() {
    assert_eq!(find_cookie("", "token"), None);
    assert_eq!(find_cookie("token=", "token"), None);
    assert_eq!(find_cookie("xtoken=1", "token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn set_document_cookie_without_browser_fails() {
    assert!(set_document_cookie("token=a").is_err());
    assert_eq!(document_cookies(), None);
}
