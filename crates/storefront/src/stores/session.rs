//! Session store.
//!
//! Holds the identity of the current visitor. Any email/username pair is
//! accepted: there is no credential check and no uniqueness constraint.

use std::sync::Arc;

use buildmart_core::User;
use thiserror::Error;
use tracing::instrument;

use crate::storage::{LocalStore, StorageError, keys};

/// Errors raised by [`SessionStore`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted user record could not be decoded.
    #[error("persisted session is malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Encoding the user record failed.
    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),
}

/// What happens to the user id when session fields are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Re-create the record with a fresh id, exactly as a login would.
    #[default]
    Regenerate,
    /// Keep the id of the current session.
    Preserve,
}

/// Editable display fields of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    pub email: String,
    pub username: String,
}

/// Persisted session identity.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn LocalStore>,
}

impl SessionStore {
    /// Create a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn LocalStore>) -> Self {
        Self { storage }
    }

    /// Start a new session, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    #[instrument(skip(self), fields(user_id = tracing::field::Empty))]
    pub fn create_session(&self, email: &str, username: &str) -> Result<User, SessionError> {
        let user = User::consumer(email, username);
        tracing::Span::current().record("user_id", tracing::field::display(&user.id));
        self.persist(&user)?;
        tracing::info!("Session created");
        Ok(user)
    }

    /// Alias of [`create_session`](Self::create_session).
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    pub fn login(&self, email: &str, username: &str) -> Result<User, SessionError> {
        self.create_session(email, username)
    }

    /// Replace the display fields of the current session.
    ///
    /// With no current session this starts one, as
    /// [`create_session`](Self::create_session) would.
    ///
    /// # Errors
    ///
    /// Returns an error if the current session is malformed or the updated
    /// session cannot be persisted.
    #[instrument(skip(self, fields))]
    pub fn update_session_fields(
        &self,
        fields: SessionFields,
        policy: IdentityPolicy,
    ) -> Result<User, SessionError> {
        let current = match policy {
            IdentityPolicy::Regenerate => None,
            IdentityPolicy::Preserve => self.current_user()?,
        };

        let Some(mut user) = current else {
            return self.create_session(&fields.email, &fields.username);
        };

        user.email = fields.email;
        user.username = fields.username;
        self.persist(&user)?;
        tracing::info!(user_id = %user.id, "Session fields updated");
        Ok(user)
    }

    /// End the current session.
    ///
    /// The cart is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the session record cannot be removed.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), SessionError> {
        self.storage.remove(keys::USER)?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Whether a session record is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.storage.get(keys::USER)?.is_some())
    }

    /// The persisted user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if the record cannot be decoded.
    pub fn current_user(&self) -> Result<Option<User>, SessionError> {
        self.storage
            .get(keys::USER)?
            .map(|raw| serde_json::from_str(&raw).map_err(SessionError::Malformed))
            .transpose()
    }

    fn persist(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user).map_err(SessionError::Encode)?;
        self.storage.set(keys::USER, &raw)?;
        Ok(())
    }
}
