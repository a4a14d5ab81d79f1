//! Profile editor.
//!
//! Edits the session's display fields. The phone number is collected by the
//! form but the session record has nowhere to keep it.

use buildmart_core::User;
use serde::Deserialize;
use tracing::instrument;

use crate::stores::{IdentityPolicy, SessionError, SessionFields, SessionStore};

/// Profile form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ProfileForm {
    /// Form pre-filled from the current session.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            phone: String::new(),
        }
    }

    /// Apply the form to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or persisted.
    #[instrument(skip(self, session))]
    pub fn submit(
        self,
        session: &SessionStore,
        policy: IdentityPolicy,
    ) -> Result<User, SessionError> {
        if !self.phone.is_empty() {
            tracing::debug!("Phone number is not stored on the session");
        }

        session.update_session_fields(
            SessionFields {
                email: self.email,
                username: self.username,
            },
            policy,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_from_user_prefills_fields() {
        let user = User::consumer("a@b.com", "alice");
        let form = ProfileForm::from_user(&user);
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.username, "alice");
        assert!(form.phone.is_empty());
    }

    #[test]
    fn test_submit_updates_session() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        session.login("a@b.com", "alice").unwrap();

        let form = ProfileForm {
            username: "alicia".to_string(),
            email: "alicia@b.com".to_string(),
            phone: "555-0100".to_string(),
        };
        let user = form.submit(&session, IdentityPolicy::default()).unwrap();

        assert_eq!(user.username, "alicia");
        assert_eq!(session.current_user().unwrap().unwrap(), user);
    }
}
