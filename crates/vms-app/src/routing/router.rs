use super::guard::{Guard, GuardDecision};
use super::route::Route;
use crate::session::SessionReader;
use vms_core::{Session, VmsError};

/// Redirects followed before a navigation is reported as a loop.
///
/// With the current route table every session settles after at most one
/// redirect.
pub const MAX_REDIRECTS: usize = 4;

/// Result of resolving a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Route the caller asked for
    pub requested: Route,
    /// Route that renders
    pub route: Route,
    /// Redirect targets followed, in order
    pub redirects: Vec<Route>,
}

impl Navigation {
    pub fn is_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Follow guard redirects from `requested` until a route renders.
pub fn resolve(requested: Route, session: &Session) -> Result<Navigation, VmsError> {
    let mut current = requested.clone();
    let mut redirects = Vec::new();

    loop {
        match Guard::evaluate_all(current.guards(), session) {
            GuardDecision::Render => {
                return Ok(Navigation {
                    requested,
                    route: current,
                    redirects,
                })
            }
            GuardDecision::Redirect(target) => {
                if redirects.len() == MAX_REDIRECTS {
                    return Err(VmsError::RedirectLoop {
                        path: requested.path(),
                    });
                }
                redirects.push(target.clone());
                current = target;
            }
        }
    }
}

/// Evaluates navigations against the live session.
#[derive(Debug, Clone)]
pub struct Router {
    session: SessionReader,
}

impl Router {
    pub fn new(session: SessionReader) -> Self {
        Self { session }
    }

    /// Resolve a path against the session as it is right now.
    pub fn navigate(&self, path: &str) -> Result<Navigation, VmsError> {
        let navigation = resolve(Route::parse(path), &self.session.get())?;
        if navigation.is_redirected() {
            tracing::info!(
                from = %navigation.requested,
                to = %navigation.route,
                "Navigation redirected"
            );
        } else {
            tracing::debug!(route = %navigation.route, "Navigation rendered");
        }
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vms_core::Role;

    #[test]
    fn test_anonymous_protected_goes_to_login() {
        let nav = resolve(Route::EventFeed, &Session::anonymous()).unwrap();
        assert_eq!(nav.route, Route::Login);
        assert_eq!(nav.redirects, vec![Route::Login]);
    }

    #[test]
    fn test_authenticated_login_goes_home() {
        let session = Session::authenticated("t", Role::Volunteer);
        let nav = resolve(Route::Login, &session).unwrap();
        assert_eq!(nav.route, Route::Dashboard);
    }

    #[test]
    fn test_volunteer_create_event_goes_home() {
        let session = Session::authenticated("t", Role::Volunteer);
        let nav = resolve(Route::CreateEvent, &session).unwrap();
        assert_eq!(nav.route, Route::Dashboard);
        assert_eq!(nav.redirects.len(), 1);
    }

    #[test]
    fn test_not_found_renders_for_everyone() {
        let route = Route::parse("/missing");
        let nav = resolve(route.clone(), &Session::anonymous()).unwrap();
        assert_eq!(nav.route, route);
        assert!(!nav.is_redirected());
    }

    #[test]
    fn test_router_reads_live_session() {
        let router = Router::new(SessionReader::fixed(Session::authenticated(
            "t",
            Role::Organizer,
        )));
        let nav = router.navigate("/events/create").unwrap();
        assert_eq!(nav.route, Route::CreateEvent);
    }
}
