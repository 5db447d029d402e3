use registro_table::Table;
use serde::{Deserialize, Serialize};

/// Per-user ephemeral state: the authenticated identity (if any) and the
/// currently loaded table (if any).
///
/// A session is a plain owned value the host passes into every operation;
/// there is no ambient global state, so multiple sessions can coexist
/// without interference. Table state is independent of auth state: logging
/// out does not drop the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    user: Option<String>,
    table: Option<Table>,
}

impl Session {
    /// Create a fresh session with no identity and no table
    #[must_use]
    pub fn new() -> Self {
        Session {
            user: None,
            table: None,
        }
    }

    /// The currently authenticated identity, if any
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Bind an identity to the session
    pub fn set_current_user<S: Into<String>>(&mut self, identity: S) {
        self.user = Some(identity.into());
    }

    /// Clear the identity; the table, if any, stays loaded
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Check whether an identity is bound
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The loaded table, if any
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Mutable access to the loaded table, if any
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        self.table.as_mut()
    }

    /// Install (or replace) the loaded table
    pub fn set_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    /// Check whether a table has been uploaded
    #[must_use]
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }
}
