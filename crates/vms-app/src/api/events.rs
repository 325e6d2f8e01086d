//! Event endpoints.

use super::list_field;
use crate::http::{ApiClient, MultipartForm};
use serde_json::Value;
use vms_core::{Event, EventId, HttpError, Volunteer};

/// `GET /events[?search=]`
pub async fn list(api: &ApiClient, search: &str) -> Result<Vec<Event>, HttpError> {
    let body: Value = api.get("/events", &[("search", search)]).await?;
    list_field(body, "events")
}

/// `GET /organizer/events`: events the caller created.
pub async fn organizer_events(api: &ApiClient) -> Result<Vec<Event>, HttpError> {
    let body: Value = api.get("/organizer/events", &[]).await?;
    list_field(body, "events")
}

/// `GET /volunteer/events`: events the caller registered for.
pub async fn volunteer_events(api: &ApiClient) -> Result<Vec<Event>, HttpError> {
    let body: Value = api.get("/volunteer/events", &[]).await?;
    list_field(body, "events")
}

/// `POST /events/{id}/register`. Answers 409 when already registered.
pub async fn register(api: &ApiClient, id: EventId) -> Result<(), HttpError> {
    api.post(&format!("/events/{id}/register")).await
}

/// `GET /events/{id}/volunteers` (organizer of the event only).
pub async fn volunteers(api: &ApiClient, id: EventId) -> Result<Vec<Volunteer>, HttpError> {
    let body: Value = api.get(&format!("/events/{id}/volunteers"), &[]).await?;
    list_field(body, "volunteers")
}

/// `POST /events` as multipart.
pub async fn create(api: &ApiClient, form: MultipartForm) -> Result<(), HttpError> {
    api.post_multipart("/events", form).await
}
