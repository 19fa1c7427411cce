use axum::http::HeaderMap;
use axum::http::header::{COOKIE, HeaderValue, SET_COOKIE};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use super::*;

fn store() -> (Arc<BrowserStorage>, CookieTokenStore) {
    let storage = Arc::new(BrowserStorage::new(false));
    let store = CookieTokenStore::new(storage.clone());
    (storage, store)
}

#[test]
fn set_then_get_roundtrips_exact_token() {
    let (_, store) = store();
    assert!(!store.has_token());
    store.set("eyJhbGciOi.J9 with spaces");
    assert_eq!(store.get().as_deref(), Some("eyJhbGciOi.J9 with spaces"));
    assert!(store.has_token());
}

#[test]
fn clear_removes_cookie_and_backup() {
    let (storage, store) = store();
    store.set("tok");
    assert_eq!(storage.local_item(TOKEN_BACKUP_KEY).as_deref(), Some("tok"));

    store.clear();
    assert_eq!(store.get(), None);
    assert!(!store.has_token());
    assert_eq!(storage.local_item(TOKEN_BACKUP_KEY), None);
}

#[test]
fn clear_twice_is_harmless() {
    let (_, store) = store();
    store.set("tok");
    store.clear();
    store.clear();
    assert!(!store.has_token());
}

#[test]
fn backup_copy_does_not_count_as_present() {
    let (storage, store) = store();
    storage.set_local_item(TOKEN_BACKUP_KEY, "orphan");
    assert!(!store.has_token());
}

#[test]
fn empty_cookie_value_is_absent() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("auth_token="));
    let storage = Arc::new(BrowserStorage::from_jar(CookieJar::from_headers(&headers), false));
    assert!(!CookieTokenStore::new(storage).has_token());
}

#[test]
fn detached_store_is_inert() {
    let store = CookieTokenStore::detached();
    store.set("tok");
    assert_eq!(store.get(), None);
    assert!(!store.has_token());
    store.clear();
}

#[test]
fn clearing_a_request_cookie_emits_removal() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("auth_token=tok"));
    let storage = Arc::new(BrowserStorage::from_jar(CookieJar::from_headers(&headers), false));
    let store = CookieTokenStore::new(storage.clone());
    assert!(store.has_token());

    store.clear();
    let response = storage.jar().into_response();
    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("auth_token="), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "{set_cookie}");
}

#[test]
fn set_emits_fifteen_minute_cookie() {
    let (storage, store) = store();
    store.set("tok");
    let response = storage.jar().into_response();
    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("auth_token=tok"), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=900"), "{set_cookie}");
    assert!(set_cookie.contains("SameSite=Lax"), "{set_cookie}");
    assert!(set_cookie.contains("Path=/"), "{set_cookie}");
}
