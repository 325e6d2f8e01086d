use super::serde_helpers::{empty_as_none, null_as_default};
use crate::identifiers::UserId;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// A person in the network.
///
/// `is_followed` is the caller's outgoing follow edge toward this user. Follow
/// is directed; nothing here says whether the user follows back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub is_followed: bool,
}

impl User {
    /// Name to show, falling back to the email for accounts without one.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A registrant listed for one of an organizer's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profile_image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_user_decodes() {
        let user: User =
            serde_json::from_str(r#"{"id":3,"email":"vol2@vms.com","role":"Volunteer"}"#)
                .unwrap();
        assert_eq!(user.id, UserId(3));
        assert_eq!(user.display_name(), "vol2@vms.com");
        assert!(!user.is_followed);
        assert_eq!(user.profile_image_url, None);
    }

    #[test]
    fn test_null_skills() {
        let v: Volunteer =
            serde_json::from_str(r#"{"id":2,"email":"vol1@vms.com","skills":null}"#).unwrap();
        assert!(v.skills.is_empty());
    }
}
