//! Group creation.

use super::require;
use crate::api;
use crate::http::{ApiClient, FilePart, MultipartForm};
use vms_core::VmsError;

/// Form contents for a new group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub image: Option<FilePart>,
}

impl GroupDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn validate(&self) -> Result<(), VmsError> {
        require("Name", &self.name)?;
        require("Description", &self.description)
    }

    /// Multipart body with fields `name, description, image`.
    pub fn into_form(self) -> MultipartForm {
        let form = MultipartForm::new()
            .text("name", self.name.trim())
            .text("description", self.description);
        match self.image {
            Some(image) => form.file("image", image),
            None => form,
        }
    }
}

/// `POST /groups`. The creator becomes the group's admin.
pub async fn create_group(client: &ApiClient, draft: GroupDraft) -> Result<(), VmsError> {
    draft.validate()?;
    let name = draft.name.clone();
    api::groups::create(client, draft.into_form()).await?;
    tracing::info!(%name, "Group created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert!(GroupDraft::new("Beach Crew", "We clean beaches").validate().is_ok());
        assert!(GroupDraft::new("", "x").validate().is_err());
        assert!(GroupDraft::new("x", "  ").validate().is_err());
    }

    #[test]
    fn test_form_without_image() {
        let form = GroupDraft::new(" Beach Crew ", "We clean beaches").into_form();
        assert_eq!(form.text_value("name"), Some("Beach Crew"));
        assert!(form.files.is_empty());
    }
}
