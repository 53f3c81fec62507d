//! # quill-auth
//!
//! Argon2id password hashing and the credential-check flow (register,
//! login) for Quill. Session state itself lives in a signed cookie and is
//! managed at the HTTP layer.

pub mod password;
pub mod service;

pub use password::PasswordHasher;
pub use service::AuthService;
