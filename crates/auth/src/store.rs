use crate::error::{AuthError, ValidationError};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::collections::HashMap;
use std::sync::RwLock;

/// Abstraction over where credentials live.
///
/// The core only ever registers and verifies; a host can back this with a
/// file or a real identity store without changing callers.
pub trait CredentialStore {
    /// Register a new identity.
    ///
    /// Fails when the identity is empty, the passwords differ, or the
    /// identity is already registered.
    fn register(
        &self,
        identity: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ValidationError>;

    /// Check a password against the stored hash for `identity`.
    ///
    /// Unknown identities and wrong passwords are indistinguishable to the
    /// caller.
    fn verify(&self, identity: &str, password: &str) -> Result<(), AuthError>;
}

/// Process-lifetime credential store.
///
/// Holds identity -> password-hash pairs in memory; nothing survives a
/// restart. Registration runs under one write lock so concurrent
/// registration of the same identity cannot race.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        MemoryStore {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Number of registered identities
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    /// Check whether no identity is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryStore {
    fn register(
        &self,
        identity: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), ValidationError> {
        if identity.is_empty() {
            return Err(ValidationError::EmptyIdentity);
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        // Hash outside the lock; check-and-insert inside it.
        let hash = hash_password(password).map_err(|e| {
            tracing::warn!(identity, error = %e, "password hashing failed during registration");
            ValidationError::Internal(e.to_string())
        })?;

        let mut users = self.users.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if users.contains_key(identity) {
            return Err(ValidationError::AlreadyRegistered {
                identity: identity.to_string(),
            });
        }
        users.insert(identity.to_string(), hash);
        tracing::debug!(identity, "registered identity");
        Ok(())
    }

    fn verify(&self, identity: &str, password: &str) -> Result<(), AuthError> {
        let users = self.users.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(stored) = users.get(identity) else {
            tracing::debug!(identity, "login attempt for unknown identity");
            return Err(AuthError::InvalidCredentials);
        };
        if verify_password(password, stored)? {
            Ok(())
        } else {
            tracing::debug!(identity, "login attempt with wrong password");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Hash a password with Argon2id and a fresh random salt, producing a
/// PHC-format string.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored PHC-format hash
fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
