//! Organizer event creation.

use super::require;
use crate::api;
use crate::core::AppCore;
use crate::http::{FilePart, MultipartForm};
use crate::routing::Navigation;
use vms_core::VmsError;

/// Form contents for a new event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub location_address: Option<String>,
    pub image: Option<FilePart>,
}

impl EventDraft {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), VmsError> {
        require("Name", &self.name)?;
        require("Date", &self.date)?;
        require("Description", &self.description)
    }

    /// Multipart body with fields `name, date, description,
    /// locationAddress, image`. Empty optional fields are left out.
    pub fn into_form(self) -> MultipartForm {
        let mut form = MultipartForm::new()
            .text("name", self.name.trim())
            .text("date", self.date.trim())
            .text("description", self.description);
        if let Some(address) = self.location_address.filter(|a| !a.trim().is_empty()) {
            form = form.text("locationAddress", address);
        }
        if let Some(image) = self.image {
            form = form.file("image", image);
        }
        form
    }
}

/// Create an event and land on `/events`.
///
/// A 400 comes back as the server's error text; the caller stays on the
/// form.
pub async fn create_event(app: &AppCore, draft: EventDraft) -> Result<Navigation, VmsError> {
    if !app.session().get().is_organizer() {
        return Err(VmsError::invalid("Only organizers can create events"));
    }
    draft.validate()?;

    let name = draft.name.clone();
    api::events::create(app.api(), draft.into_form()).await?;
    tracing::info!(%name, "Event created");
    app.navigate("/events")
}
