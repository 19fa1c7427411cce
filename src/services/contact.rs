//! Contact form submission.

use serde::Serialize;

use crate::http::{ApiClient, ApiError};

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `POST /contact`. Field validation is the backend's job.
///
/// # Errors
///
/// Pipeline failure, including 4xx validation rejections.
pub async fn send(client: &ApiClient, message: &ContactMessage) -> Result<(), ApiError> {
    client.post("/contact", message).await.map(|_| ())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
