pub mod jwt;
pub mod password;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid or expired token")]
    InvalidToken,

    #[error("token creation failed: {0}")]
    TokenCreation(String),

    #[error("password hashing failed: {0}")]
    Hash(String),
}
