//! Authentication primitives for home-space.
//!
//! - Password hashing (Argon2id, tunable cost)
//! - Access token issuing and verification (HS256 JWT)
//!
//! The service crate defines its own domain errors and decides how these
//! primitives are combined into registration and login.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_params(1024, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&hash, "my_password").unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, TokenCodec};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", "http://localhost:8080");
//! let token = codec.issue(&Claims::for_user("alice").with_user_id(1)).unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.user_name, "alice");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
