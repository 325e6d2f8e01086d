use super::route::Route;
use vms_core::{Role, Session};

/// Session predicate attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Requires a token; anonymous sessions go to `/login`.
    Protected,
    /// Requires no token; authenticated sessions go to `/home`.
    PublicOnly,
    /// Requires the Organizer role; everyone else goes to `/home`.
    OrganizerOnly,
}

/// Outcome of a guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

impl Guard {
    /// Pure function of the session.
    pub fn evaluate(&self, session: &Session) -> GuardDecision {
        match self {
            Self::Protected if session.is_authenticated() => GuardDecision::Render,
            Self::Protected => GuardDecision::Redirect(Route::Login),
            Self::PublicOnly if session.is_authenticated() => {
                GuardDecision::Redirect(Route::Dashboard)
            }
            Self::PublicOnly => GuardDecision::Render,
            Self::OrganizerOnly => match session.role {
                Some(Role::Organizer) => GuardDecision::Render,
                Some(Role::Volunteer) | None => GuardDecision::Redirect(Route::Dashboard),
            },
        }
    }

    /// Evaluate a route's guards in order; the first redirect wins.
    pub fn evaluate_all(guards: &[Guard], session: &Session) -> GuardDecision {
        guards
            .iter()
            .map(|guard| guard.evaluate(session))
            .find(|decision| matches!(decision, GuardDecision::Redirect(_)))
            .unwrap_or(GuardDecision::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected() {
        assert_eq!(
            Guard::Protected.evaluate(&Session::anonymous()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            Guard::Protected.evaluate(&Session::authenticated("t", Role::Volunteer)),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_public_only() {
        assert_eq!(
            Guard::PublicOnly.evaluate(&Session::anonymous()),
            GuardDecision::Render
        );
        assert_eq!(
            Guard::PublicOnly.evaluate(&Session::authenticated("t", Role::Organizer)),
            GuardDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_organizer_only() {
        assert_eq!(
            Guard::OrganizerOnly.evaluate(&Session::authenticated("t", Role::Organizer)),
            GuardDecision::Render
        );
        assert_eq!(
            Guard::OrganizerOnly.evaluate(&Session::authenticated("t", Role::Volunteer)),
            GuardDecision::Redirect(Route::Dashboard)
        );
        let token_without_role = Session {
            token: Some("t".into()),
            role: None,
        };
        assert_eq!(
            Guard::OrganizerOnly.evaluate(&token_without_role),
            GuardDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_first_redirect_wins() {
        let guards = [Guard::Protected, Guard::OrganizerOnly];
        assert_eq!(
            Guard::evaluate_all(&guards, &Session::anonymous()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            Guard::evaluate_all(&[], &Session::anonymous()),
            GuardDecision::Render
        );
    }
}
