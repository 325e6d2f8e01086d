use crate::routing::{Navigation, Route};
use crate::views::{
    Dashboard, EventFeed, GroupDetails, Groups, Notifications, People, Profile,
};

/// A page that rendered. Data pages carry their mounted view.
#[derive(Debug)]
pub enum Page {
    Landing,
    Login,
    Register,
    Dashboard(Dashboard),
    EventFeed(EventFeed),
    /// Form page; submitted through the create-event workflow
    CreateEvent,
    Network(People),
    Groups(Groups),
    GroupDetails(GroupDetails),
    Notifications(Notifications),
    Profile(Profile),
    NotFound(String),
}

impl Page {
    /// Route this page renders.
    pub fn route(&self) -> Route {
        match self {
            Self::Landing => Route::Landing,
            Self::Login => Route::Login,
            Self::Register => Route::Register,
            Self::Dashboard(_) => Route::Dashboard,
            Self::EventFeed(_) => Route::EventFeed,
            Self::CreateEvent => Route::CreateEvent,
            Self::Network(_) => Route::Network,
            Self::Groups(_) => Route::Groups,
            Self::GroupDetails(view) => Route::GroupDetails(view.id()),
            Self::Notifications(_) => Route::Notifications,
            Self::Profile(_) => Route::Profile,
            Self::NotFound(path) => Route::NotFound(path.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Welcome",
            Self::Login => "Log In",
            Self::Register => "Create Account",
            Self::Dashboard(view) => view.title(),
            Self::EventFeed(_) => "Upcoming Events",
            Self::CreateEvent => "Create New Event",
            Self::Network(_) => "Find People",
            Self::Groups(_) => "Groups",
            Self::GroupDetails(_) => "Group",
            Self::Notifications(_) => "Notifications",
            Self::Profile(_) => "My Profile",
            Self::NotFound(_) => "Page Not Found",
        }
    }
}

/// Outcome of [`AppCore::open`](super::AppCore::open).
#[derive(Debug)]
pub struct Opened {
    pub navigation: Navigation,
    pub page: Page,
}
