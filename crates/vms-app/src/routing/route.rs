use super::guard::Guard;
use std::fmt;
use vms_core::GroupId;

/// Application pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    /// `/home`
    Dashboard,
    /// `/events`
    EventFeed,
    /// `/events/create`
    CreateEvent,
    Network,
    Groups,
    GroupDetails(GroupId),
    Notifications,
    Profile,
    /// Any unknown path, kept verbatim
    NotFound(String),
}

impl Route {
    /// Resolve a path. Query strings, fragments and a trailing slash are
    /// ignored.
    pub fn parse(path: &str) -> Self {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = match bare.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match normalized {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/home" => Self::Dashboard,
            "/events" => Self::EventFeed,
            "/events/create" => Self::CreateEvent,
            "/network" => Self::Network,
            "/groups" => Self::Groups,
            "/notifications" => Self::Notifications,
            "/profile" => Self::Profile,
            other => match other.strip_prefix("/groups/").map(str::parse::<GroupId>) {
                Some(Ok(id)) => Self::GroupDetails(id),
                _ => Self::NotFound(normalized.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/home".to_string(),
            Self::EventFeed => "/events".to_string(),
            Self::CreateEvent => "/events/create".to_string(),
            Self::Network => "/network".to_string(),
            Self::Groups => "/groups".to_string(),
            Self::GroupDetails(id) => format!("/groups/{id}"),
            Self::Notifications => "/notifications".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Guards in evaluation order.
    pub fn guards(&self) -> &'static [Guard] {
        match self {
            Self::Landing | Self::Login | Self::Register => &[Guard::PublicOnly],
            Self::CreateEvent => &[Guard::Protected, Guard::OrganizerOnly],
            Self::Dashboard
            | Self::EventFeed
            | Self::Network
            | Self::Groups
            | Self::GroupDetails(_)
            | Self::Notifications
            | Self::Profile => &[Guard::Protected],
            Self::NotFound(_) => &[],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/home"), Route::Dashboard);
        assert_eq!(Route::parse("/events/"), Route::EventFeed);
        assert_eq!(Route::parse("/events/create"), Route::CreateEvent);
        assert_eq!(Route::parse("/groups?search=beach"), Route::Groups);
        assert_eq!(Route::parse("/groups/12"), Route::GroupDetails(GroupId(12)));
        assert_eq!(
            Route::parse("/groups/abc"),
            Route::NotFound("/groups/abc".to_string())
        );
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".to_string()));
    }

    #[test]
    fn test_path_round_trips_for_known_routes() {
        for path in [
            "/",
            "/login",
            "/register",
            "/home",
            "/events",
            "/events/create",
            "/network",
            "/groups",
            "/groups/7",
            "/notifications",
            "/profile",
        ] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_create_event_checks_login_before_role() {
        assert_eq!(
            Route::CreateEvent.guards(),
            &[Guard::Protected, Guard::OrganizerOnly]
        );
        assert!(Route::NotFound("/x".into()).guards().is_empty());
    }
}
