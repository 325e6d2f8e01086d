//! Session credentials.

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The pair identifying the current user: bearer token and role claim.
///
/// Sessions are values. Consumers read snapshots and never mutate them in
/// place; the session store replaces the whole value on login and logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by `POST /login`
    pub token: Option<String>,
    /// Role claim returned alongside the token
    pub role: Option<Role>,
}

impl Session {
    /// Anonymous session (no token, no role).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for a successful login.
    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// Whether a token is present. An empty token counts as absent.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Bearer token to attach to requests, if any.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether the role claim is Organizer.
    pub fn is_organizer(&self) -> bool {
        matches!(self.role, Some(Role::Organizer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_anonymous() {
        let session = Session {
            token: Some(String::new()),
            role: Some(Role::Volunteer),
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_authenticated() {
        let session = Session::authenticated("abc", Role::Organizer);
        assert!(session.is_authenticated());
        assert!(session.is_organizer());
        assert_eq!(session.bearer(), Some("abc"));
    }
}
