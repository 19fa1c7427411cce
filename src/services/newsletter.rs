//! Newsletter subscription.

use serde::Serialize;

use crate::http::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct Subscriber<'a> {
    email: &'a str,
}

/// `POST /newsletter/subscribe`.
///
/// # Errors
///
/// Pipeline failure (a duplicate address is usually a 409).
pub async fn subscribe(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client
        .post("/newsletter/subscribe", &Subscriber { email })
        .await
        .map(|_| ())
}

/// `POST /newsletter/unsubscribe`.
///
/// # Errors
///
/// Pipeline failure.
pub async fn unsubscribe(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client
        .post("/newsletter/unsubscribe", &Subscriber { email })
        .await
        .map(|_| ())
}
