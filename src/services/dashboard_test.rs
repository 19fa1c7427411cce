use reqwest::Method;
use reqwest::header::AUTHORIZATION;

use super::*;
use crate::http::mock::{MockTransport, client_with};
use crate::locale::Locale;

#[tokio::test]
async fn favorites_roundtrip_carries_token() {
    let transport = MockTransport::new(vec![
        MockTransport::ok(r#"{"data":[{"id":3,"name":"Valley of the Kings"}]}"#),
        MockTransport::ok(r#"{"message":"added"}"#),
        MockTransport::ok(""),
    ]);
    let (client, _, tokens) = client_with(transport.clone(), Locale::En);
    tokens.set("tok");

    let favs = favorites(&client).await.unwrap();
    assert_eq!(favs[0].id, "3");

    add_favorite(&client, "3").await.unwrap();
    remove_favorite(&client, "3").await.unwrap();

    let seen = transport.seen();
    assert_eq!(seen[1].method, Method::POST);
    assert_eq!(seen[1].body, Some(serde_json::json!({ "monumentId": "3" })));
    assert_eq!(seen[2].method, Method::DELETE);
    assert_eq!(seen[2].path, "/dashboard/favorites/3");
    assert!(seen.iter().all(|r| r.header(&AUTHORIZATION) == Some("Bearer tok")));
}

#[tokio::test]
async fn expired_session_on_dashboard_clears_token() {
    let transport = MockTransport::new(vec![MockTransport::status(401, "")]);
    let (client, _, tokens) = client_with(transport, Locale::Ar);
    tokens.set("stale");

    assert!(settings(&client).await.unwrap_err().is_unauthorized());
    assert!(!tokens.has_token());
}

#[tokio::test]
async fn update_settings_puts_camel_case_body() {
    let stored = r#"{"data":{"language":"ar","emailNotifications":true,"newsletter":false}}"#;
    let transport = MockTransport::new(vec![MockTransport::ok(stored)]);
    let (client, _, _) = client_with(transport.clone(), Locale::En);
    let wanted = Settings { language: Some("ar".into()), email_notifications: true, newsletter: false };

    let saved = update_settings(&client, &wanted).await.unwrap();
    assert_eq!(saved, wanted);

    let sent = transport.last();
    assert_eq!(sent.method, Method::PUT);
    assert_eq!(sent.body.unwrap()["emailNotifications"], true);
}
