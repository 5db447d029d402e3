//! Auth module for registro
//!
//! Maintains registered identities and their password hashes for the
//! lifetime of the process, and validates login attempts. This is
//! explicitly not a durable identity provider: nothing is persisted and
//! there is no token or expiry machinery.
//!
//! Passwords are stored as salted Argon2id hashes, never in clear text.
//!
//! # Examples
//!
//! ```
//! use registro_auth::{CredentialStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.register("user@example.it", "segreta", "segreta").unwrap();
//!
//! assert!(store.verify("user@example.it", "segreta").is_ok());
//! assert!(store.verify("user@example.it", "sbagliata").is_err());
//! ```

mod error;
mod store;

/// Re-export auth error types.
pub use error::{AuthError, ValidationError};
/// Re-export the credential store abstraction and its in-memory backend.
pub use store::{CredentialStore, MemoryStore};
