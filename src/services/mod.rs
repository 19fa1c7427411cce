//! Feature services: thin request builders over [`crate::http::ApiClient`].
//!
//! ARCHITECTURE
//! ============
//! Each module maps one backend resource to typed calls. Business rules live
//! in the backend; services only shape requests and decode envelopes.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod monuments;
pub mod newsletter;
pub mod saved_searches;

use serde::{Deserialize, Deserializer};

/// Backend ids arrive as strings or numbers depending on the resource.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Percent-encode an id for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
