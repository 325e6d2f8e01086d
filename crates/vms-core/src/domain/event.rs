use super::serde_helpers::{empty_as_none, null_as_default};
use crate::identifiers::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// A volunteering event.
///
/// `date` is kept as the backend's string (`YYYY-MM-DD`); the client never
/// does date arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location_address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub created_by_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub followers_going_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_going: Vec<String>,
}

impl Event {
    /// Record a confirmed (or optimistic) registration.
    ///
    /// Registration is one-way: there is no unregister, so this never clears
    /// the flag.
    pub fn mark_registered(&mut self) {
        self.is_registered = true;
    }

    /// Organizer label, falling back to the email on older backends.
    pub fn organizer_label(&self) -> &str {
        if !self.created_by_name.is_empty() {
            &self.created_by_name
        } else {
            self.created_by_email.as_deref().unwrap_or("Organizer")
        }
    }

    /// "Who you follow is going" line for the event card.
    pub fn social_proof(&self) -> Option<String> {
        let total = (self.followers_going_count as usize).max(self.followers_going.len());
        match self.followers_going.as_slice() {
            [] => None,
            [only] if total == 1 => Some(format!("{only} is going")),
            [first, second] if total == 2 => Some(format!("{first} and {second} are going")),
            [first, ..] if total == 2 => Some(format!("{first} and 1 other you follow are going")),
            [first] => Some(format!(
                "{first} and {} others you follow are going",
                total - 1
            )),
            [first, second, ..] => Some(format!(
                "{first}, {second} and {} others you follow are going",
                total - 2
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_backend_shape_decodes() {
        let e = event(
            r#"{"id":1,"name":"Chittagong Beach Cleanup","date":"2025-12-25",
                "description":"Let's clean up Patenga Beach for the holidays!",
                "createdBy":1,"createdByEmail":"organizer@vms.com",
                "imageUrl":"","locationAddress":"Patenga Beach, Chittagong"}"#,
        );
        assert_eq!(e.id, EventId(1));
        assert_eq!(e.image_url, None);
        assert_eq!(
            e.location_address.as_deref(),
            Some("Patenga Beach, Chittagong")
        );
        assert_eq!(e.organizer_label(), "organizer@vms.com");
        assert!(!e.is_registered);
    }

    #[test]
    fn test_registration_is_monotonic() {
        let mut e = event(r#"{"id":2,"name":"n","date":"d","isRegistered":true}"#);
        e.mark_registered();
        assert!(e.is_registered);
    }

    #[test]
    fn test_social_proof() {
        let mut e = event(r#"{"id":3,"name":"n","date":"d"}"#);
        assert_eq!(e.social_proof(), None);

        e.followers_going = vec!["Rahim".into()];
        e.followers_going_count = 1;
        assert_eq!(e.social_proof().as_deref(), Some("Rahim is going"));

        e.followers_going = vec!["Rahim".into(), "Karim".into()];
        e.followers_going_count = 2;
        assert_eq!(e.social_proof().as_deref(), Some("Rahim and Karim are going"));

        e.followers_going_count = 5;
        assert_eq!(
            e.social_proof().as_deref(),
            Some("Rahim, Karim and 3 others you follow are going")
        );
    }
}
