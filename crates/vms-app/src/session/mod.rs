//! Session store and read-only session handles.
//!
//! [`SessionStore`] is the only writer. Everything else (guards, the API
//! client, live views) holds a [`SessionReader`], which can snapshot the
//! current session or observe replacements.

mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use futures::{future, Stream, StreamExt};
use futures_signals::signal::{Mutable, ReadOnlyMutable, SignalExt};
use vms_core::{Role, Session, VmsError};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the role claim.
pub const ROLE_KEY: &str = "role";

/// Persisted session credentials with change notification.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: Mutable<Session>,
}

impl SessionStore {
    /// Load the persisted session synchronously.
    ///
    /// A stored role that does not name a known role loads as absent.
    pub fn load(storage: impl SessionStorage + 'static) -> Result<Self, VmsError> {
        let token = storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let role = match storage.get(ROLE_KEY)? {
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring stored role");
                    None
                }
            },
            None => None,
        };
        let session = Session { token, role };
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "Loaded persisted session"
        );
        Ok(Self {
            storage: Box::new(storage),
            current: Mutable::new(session),
        })
    }

    /// Current session snapshot.
    pub fn get(&self) -> Session {
        self.current.get_cloned()
    }

    /// Persist and publish a new session. Both keys are written together.
    pub fn set(&self, token: impl Into<String>, role: Role) -> Result<(), VmsError> {
        let token = token.into();
        self.storage
            .set_many(&[(TOKEN_KEY, token.as_str()), (ROLE_KEY, role.as_str())])?;
        self.current.set_neq(Session::authenticated(token, role));
        tracing::info!(role = %role, "Session established");
        Ok(())
    }

    /// Remove both keys and publish the anonymous session.
    pub fn clear(&self) -> Result<(), VmsError> {
        self.storage.remove_many(&[TOKEN_KEY, ROLE_KEY])?;
        self.current.set_neq(Session::anonymous());
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Read-only handle for consumers.
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            current: self.current.read_only(),
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.get();
        f.debug_struct("SessionStore")
            .field("authenticated", &session.is_authenticated())
            .field("role", &session.role)
            .finish()
    }
}

/// Cloneable read-only view of the session.
#[derive(Clone)]
pub struct SessionReader {
    current: ReadOnlyMutable<Session>,
}

impl SessionReader {
    /// Reader over a fixed session, for code paths that never log in.
    pub fn fixed(session: Session) -> Self {
        Self {
            current: Mutable::new(session).read_only(),
        }
    }

    pub fn get(&self) -> Session {
        self.current.get_cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock_ref().is_authenticated()
    }

    pub fn bearer(&self) -> Option<String> {
        self.current.lock_ref().bearer().map(str::to_string)
    }

    /// Stream of session replacements, not including the value current when
    /// the stream was created.
    pub fn changes(&self) -> impl Stream<Item = Session> + Send + Unpin + 'static {
        let initial = self.get();
        let mut first = true;
        self.current
            .signal_cloned()
            .to_stream()
            .filter_map(move |session| {
                let seen = first && session == initial;
                first = false;
                future::ready((!seen).then_some(session))
            })
    }
}

impl std::fmt::Debug for SessionReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionReader")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_restores_persisted_pair() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (ROLE_KEY, "Organizer")]);
        let store = SessionStore::load(storage).unwrap();
        assert_eq!(store.get(), Session::authenticated("tok", Role::Organizer));
    }

    #[test]
    fn test_unknown_role_loads_as_absent() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok"), (ROLE_KEY, "Admin")]);
        let store = SessionStore::load(storage).unwrap();
        let session = store.get();
        assert!(session.is_authenticated());
        assert_eq!(session.role, None);
    }

    #[test]
    fn test_set_then_clear() {
        let store = SessionStore::load(MemoryStorage::new()).unwrap();
        let reader = store.reader();
        assert!(!reader.is_authenticated());

        store.set("abc", Role::Volunteer).unwrap();
        assert_eq!(reader.bearer().as_deref(), Some("abc"));
        assert_eq!(reader.get().role, Some(Role::Volunteer));

        store.clear().unwrap();
        assert_eq!(reader.get(), Session::anonymous());
    }

    #[test]
    fn test_clear_removes_both_keys_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(FileStorage::open(&path).unwrap()).unwrap();
        store.set("abc", Role::Organizer).unwrap();
        let restored = SessionStore::load(FileStorage::open(&path).unwrap()).unwrap();
        assert!(restored.get().is_organizer());

        restored.clear().unwrap();
        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(ROLE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_changes_skip_current_value() {
        let store = SessionStore::load(MemoryStorage::new()).unwrap();
        let mut changes = store.reader().changes();

        store.set("abc", Role::Volunteer).unwrap();
        let next = changes.next().await.unwrap();
        assert_eq!(next.bearer(), Some("abc"));
    }
}
