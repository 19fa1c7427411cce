//! Heritage portal front-end plumbing: locale routing, the auth gate, the
//! cookie-backed token store, and the backend API client with its services.

pub mod config;
pub mod http;
pub mod locale;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod token;
