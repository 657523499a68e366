//! The session gate.
//!
//! A single shared-secret check in front of the vault. This is a soft
//! access deterrent, not a security boundary: the secret is a plain
//! configuration value, readable by anyone with access to the config or
//! the client, and there is no lockout or rate limiting. Hardening it is
//! out of scope for this design.

use log::debug;

use crate::error::VaultError;
use crate::store::SessionStore;

/// Shared-secret gate producing the session authentication flag.
///
/// The secret is injected from configuration rather than hardcoded.
pub struct Gate {
    secret: String,
}

impl Gate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check `candidate` against the shared secret.
    ///
    /// On a match the session flag is set and the vault may be opened. On
    /// a mismatch [`VaultError::AccessDenied`] is returned and the session
    /// state is untouched.
    pub fn authenticate(
        &self,
        candidate: &str,
        session: &dyn SessionStore,
    ) -> Result<(), VaultError> {
        if candidate != self.secret {
            debug!("gate rejected an unlock attempt");
            return Err(VaultError::AccessDenied);
        }
        session.set_authenticated()?;
        Ok(())
    }
}
