//! Event feed and role dashboard.

use super::live::{ListSource, LiveList};
use super::remote_list::{ConflictPolicy, Edit, FetchOutcome, LoadStatus, MutationOutcome};
use super::ViewContext;
use crate::api;
use crate::http::ApiClient;
use async_trait::async_trait;
use vms_core::{Event, EventId, HttpError, Role, VmsError, Volunteer};

// =============================================================================
// Event feed
// =============================================================================

/// Source for `/events`.
#[derive(Debug, Clone)]
pub struct FeedSource {
    api: ApiClient,
}

#[async_trait]
impl ListSource for FeedSource {
    type Item = Event;

    fn name(&self) -> &'static str {
        "events"
    }

    async fn fetch(&self, search: &str) -> Result<Vec<Event>, HttpError> {
        api::events::list(&self.api, search).await
    }
}

/// Searchable list of all events.
#[derive(Debug)]
pub struct EventFeed {
    live: LiveList<FeedSource>,
}

impl EventFeed {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = FeedSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.live.list().items()
    }

    pub fn event(&self, id: EventId) -> Option<Event> {
        self.live.list().get(&id)
    }

    pub fn status(&self) -> LoadStatus {
        self.live.list().status()
    }

    pub fn set_search(&self, term: impl Into<String>) {
        self.live.set_search(term);
    }

    /// Search without waiting for the quiet period.
    pub async fn search(&self, term: &str) -> Result<FetchOutcome, VmsError> {
        self.live.search_now(term).await
    }

    pub fn search_term(&self) -> String {
        self.live.search_term()
    }

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    /// Register for an event. The card flips to registered immediately; a
    /// 409 means the caller was already registered and keeps the flip.
    pub async fn register(&self, id: EventId) -> Result<MutationOutcome, VmsError> {
        let client = &self.live.source().api;
        self.live
            .list()
            .mutate(
                Edit::update(id, Event::mark_registered),
                api::events::register(client, id),
                ConflictPolicy::AlreadySatisfied,
            )
            .await
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Which dashboard `/home` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    /// Events the caller created
    Organizer,
    /// Events the caller registered for
    Volunteer,
}

impl DashboardKind {
    /// A session without a role claim gets the volunteer dashboard.
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Organizer) => Self::Organizer,
            Some(Role::Volunteer) | None => Self::Volunteer,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Organizer => "Events You Created",
            Self::Volunteer => "Events You're Registered For",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Organizer => "/organizer/events",
            Self::Volunteer => "/volunteer/events",
        }
    }
}

/// Source for `/home`. The kind follows the session's role at fetch time.
#[derive(Debug, Clone)]
pub struct DashboardSource {
    api: ApiClient,
}

impl DashboardSource {
    fn kind(&self) -> DashboardKind {
        DashboardKind::for_role(self.api.session().get().role)
    }
}

#[async_trait]
impl ListSource for DashboardSource {
    type Item = Event;

    fn name(&self) -> &'static str {
        "dashboard"
    }

    async fn fetch(&self, _search: &str) -> Result<Vec<Event>, HttpError> {
        match self.kind() {
            DashboardKind::Organizer => api::events::organizer_events(&self.api).await,
            DashboardKind::Volunteer => api::events::volunteer_events(&self.api).await,
        }
    }
}

/// Role-specific event list.
#[derive(Debug)]
pub struct Dashboard {
    live: LiveList<DashboardSource>,
}

impl Dashboard {
    pub async fn mount(ctx: &ViewContext) -> Self {
        let source = DashboardSource {
            api: ctx.api.clone(),
        };
        Self {
            live: LiveList::mount(source, ctx.session(), ctx.search_debounce).await,
        }
    }

    pub fn kind(&self) -> DashboardKind {
        self.live.source().kind()
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    pub fn events(&self) -> Vec<Event> {
        self.live.list().items()
    }

    pub fn status(&self) -> LoadStatus {
        self.live.list().status()
    }

    pub async fn refresh(&self) -> Result<FetchOutcome, VmsError> {
        self.live.refresh().await
    }

    /// Registrants of one of the organizer's events.
    pub async fn volunteers(&self, id: EventId) -> Result<Vec<Volunteer>, VmsError> {
        if self.kind() != DashboardKind::Organizer {
            return Err(VmsError::invalid("Only organizers can view registrants"));
        }
        Ok(api::events::volunteers(&self.live.source().api, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_role() {
        assert_eq!(
            DashboardKind::for_role(Some(Role::Organizer)),
            DashboardKind::Organizer
        );
        assert_eq!(
            DashboardKind::for_role(Some(Role::Volunteer)),
            DashboardKind::Volunteer
        );
        assert_eq!(DashboardKind::for_role(None), DashboardKind::Volunteer);
        assert_eq!(
            DashboardKind::Volunteer.title(),
            "Events You're Registered For"
        );
    }
}
