use thiserror::Error;

/// Rejected registration input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("An identity is required to register")]
    EmptyIdentity,

    #[error("The passwords do not match")]
    PasswordMismatch,

    #[error("'{identity}' is already registered")]
    AlreadyRegistered { identity: String },

    #[error("Registration failed: {0}")]
    Internal(String),
}

/// Rejected login attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identity or wrong password; callers cannot tell which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),
}
