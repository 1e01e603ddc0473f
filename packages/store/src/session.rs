//! # Session store: credential and identity that survive reloads
//!
//! [`SessionStore`] is the single service instance that owns the signed-in
//! user's bearer credential and identity. It is constructed once at startup,
//! rehydrated with [`SessionStore::restore`], and then shared (it is a cheap
//! `Clone` over `Arc` state) with every component and with the HTTP client.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string key-value interface with `get`/`set`/`remove`.
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::local`]). Storage failures are not modelled: backends swallow them
//! and reads degrade to "no value".
//!
//! ## Persisted layout
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the raw credential string |
//! | [`USER_KEY`] (`"user"`) | the [`Identity`] serialised as JSON |
//!
//! ## Lifecycle
//!
//! `new` → `restore` → ready. `login` and `logout` write through to the backend
//! and update the in-memory [`Session`] before returning, so a
//! [`current_credential`](SessionStore::current_credential) call made right
//! after `logout` already sees `None`.

use std::sync::{Arc, RwLock};

use crate::models::{Identity, Session};

/// Storage key holding the credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialised identity.
pub const USER_KEY: &str = "user";

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle to the current session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore + Send + Sync>,
    state: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Create an unauthenticated store over `backend`. Call [`restore`](Self::restore)
    /// to pick up a previously persisted session.
    pub fn new(backend: impl KeyValueStore + Send + Sync + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Rehydrate the in-memory session from durable storage.
    ///
    /// Both the credential and a well-formed identity must be present; anything
    /// less leaves the session unauthenticated. Returns whether the session is
    /// now authenticated.
    pub fn restore(&self) -> bool {
        let token = self.backend.get(TOKEN_KEY);
        let user = self.backend.get(USER_KEY);

        let (Some(token), Some(user)) = (token, user) else {
            tracing::debug!("No persisted session");
            return false;
        };

        match serde_json::from_str::<Identity>(&user) {
            Ok(identity) => {
                tracing::info!("Restored session for {}", identity.email);
                self.write(Session {
                    credential: Some(token),
                    identity: Some(identity),
                });
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted user: {}", e);
                false
            }
        }
    }

    /// Persist `credential` and `identity` and mark the session authenticated.
    pub fn login(&self, identity: Identity, credential: String) {
        match serde_json::to_string(&identity) {
            Ok(user) => self.backend.set(USER_KEY, &user),
            Err(e) => tracing::warn!("Failed to serialise identity: {}", e),
        }
        self.backend.set(TOKEN_KEY, &credential);

        tracing::info!("Signed in as {}", identity.email);
        self.write(Session {
            credential: Some(credential),
            identity: Some(identity),
        });
    }

    /// Forget the persisted session and mark the in-memory one unauthenticated.
    pub fn logout(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.write(Session::default());
        tracing::info!("Signed out");
    }

    /// The in-memory credential, if any.
    pub fn current_credential(&self) -> Option<String> {
        self.read().credential
    }

    /// The credential as currently persisted, bypassing in-memory state.
    pub fn persisted_credential(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read().identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// A copy of the whole session.
    pub fn snapshot(&self) -> Session {
        self.read()
    }

    fn read(&self) -> Session {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write(&self, session: Session) {
        match self.state.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn jane() -> Identity {
        Identity {
            id: "42".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_restore_without_persisted_session() {
        let session = SessionStore::new(MemoryStore::new());

        assert!(!session.restore());
        assert!(!session.is_authenticated());
        assert!(session.current_credential().is_none());
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_login_persists_and_restores() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(backend.clone());

        session.login(jane(), "secret-token".to_string());

        assert_eq!(session.current_credential().as_deref(), Some("secret-token"));
        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("secret-token"));
        assert!(backend.get(USER_KEY).unwrap().contains("jane@example.com"));

        // A fresh store over the same backend picks the session back up
        let reloaded = SessionStore::new(backend);
        assert!(reloaded.restore());
        assert_eq!(reloaded.identity(), Some(jane()));
        assert_eq!(reloaded.current_credential().as_deref(), Some("secret-token"));
    }

    #[test]
    fn test_logout_clears_immediately() {
        let backend = MemoryStore::new();
        let session = SessionStore::new(backend.clone());
        session.login(jane(), "secret-token".to_string());

        session.logout();

        assert!(session.current_credential().is_none());
        assert!(session.identity().is_none());
        assert!(backend.get(TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
        assert!(session.persisted_credential().is_none());
    }

    #[test]
    fn test_restore_requires_both_keys() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "orphan-token");

        let session = SessionStore::new(backend.clone());
        assert!(!session.restore());
        assert!(session.current_credential().is_none());
        // Restore leaves the orphan token in place; the route gate clears it
        assert_eq!(session.persisted_credential().as_deref(), Some("orphan-token"));
    }

    #[test]
    fn test_restore_ignores_malformed_user() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "token");
        backend.set(USER_KEY, "not json");

        let session = SessionStore::new(backend);
        assert!(!session.restore());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionStore::new(MemoryStore::new());
        let other = session.clone();

        session.login(jane(), "t".to_string());
        assert!(other.is_authenticated());
        assert_eq!(session, other);

        other.logout();
        assert!(!session.is_authenticated());
    }
}
