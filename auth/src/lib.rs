//! Authentication utilities library
//!
//! Provides the security-sensitive building blocks for the catalog service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//!
//! The HTTP service composes these; this crate knows nothing about HTTP or
//! persistence.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 120);
//! let token = tokens.issue(42).unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
