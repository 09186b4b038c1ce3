//! Authentication primitives and the credential store.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- signed session tokens and the session cookie.
//! - [`service`] -- [`AuthService`](service::AuthService), registration,
//!   login, and session resolution on top of a user store.

pub mod password;
pub mod service;
pub mod session;
