use super::group::Group;
use super::user::User;
use crate::identifiers::NotificationId;
use serde::{Deserialize, Serialize};

/// A pending group invite addressed to the caller.
///
/// Accepting or declining is terminal: the notification leaves the active set
/// either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub sender: User,
    pub group: Group,
}

impl Notification {
    /// One-line summary for list rendering.
    pub fn summary(&self) -> String {
        format!(
            "{} invited you to join the group: {}",
            self.sender.display_name(),
            self.group.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let n: Notification = serde_json::from_str(
            r#"{"id":5,
                "sender":{"id":2,"name":"Rahim","email":"vol1@vms.com"},
                "group":{"id":8,"name":"Beach Crew"}}"#,
        )
        .unwrap();
        assert_eq!(
            n.summary(),
            "Rahim invited you to join the group: Beach Crew"
        );
    }
}
