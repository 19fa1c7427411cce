use axum::http::HeaderMap;
use axum::http::header::{COOKIE, HeaderValue};

use super::*;

fn jar_from(cookie_header: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(cookie_header).unwrap());
    CookieJar::from_headers(&headers)
}

#[test]
fn cookie_roundtrip_and_removal() {
    let storage = BrowserStorage::new(false);
    assert_eq!(storage.cookie("auth_token"), None);

    storage.set_cookie("auth_token", "abc", Duration::minutes(15));
    assert_eq!(storage.cookie("auth_token").as_deref(), Some("abc"));

    storage.remove_cookie("auth_token");
    assert_eq!(storage.cookie("auth_token"), None);
}

#[test]
fn expired_cookie_reads_as_absent() {
    let storage = BrowserStorage::new(false);
    storage.set_cookie("auth_token", "stale", Duration::seconds(-1));
    assert_eq!(storage.cookie("auth_token"), None);
}

#[test]
fn written_cookie_carries_lax_root_path_and_secure_flag() {
    let storage = BrowserStorage::new(true);
    storage.set_cookie("auth_token", "abc", Duration::minutes(15));
    let jar = storage.jar();
    let cookie = jar.get("auth_token").unwrap();
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::minutes(15)));
}

#[test]
fn seeded_jar_is_readable() {
    let storage = BrowserStorage::from_jar(jar_from("auth_token=tok; NEXT_LOCALE=ar"), false);
    assert_eq!(storage.cookie("auth_token").as_deref(), Some("tok"));
    assert_eq!(storage.current(), Locale::Ar);
}

#[test]
fn locale_prefers_local_storage_then_cookie_then_default() {
    let storage = BrowserStorage::new(false);
    assert_eq!(storage.current(), Locale::En);

    storage.set_cookie(LOCALE_COOKIE, "ar", Duration::days(365));
    assert_eq!(storage.current(), Locale::Ar);

    storage.set_local_item(LOCALE_STORAGE_KEY, "en");
    assert_eq!(storage.current(), Locale::En);

    storage.set_local_item(LOCALE_STORAGE_KEY, "klingon");
    assert_eq!(storage.current(), Locale::Ar);

    storage.remove_local_item(LOCALE_STORAGE_KEY);
    assert_eq!(storage.local_item(LOCALE_STORAGE_KEY), None);
}

#[test]
fn fixed_locale_source() {
    assert_eq!(Locale::Ar.current(), Locale::Ar);
}
