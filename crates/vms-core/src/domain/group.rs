use super::serde_helpers::{empty_as_none, null_as_default};
use super::user::User;
use crate::errors::VmsError;
use crate::identifiers::{GroupId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A volunteer group.
///
/// The list endpoint omits `members`; the detail endpoint fills it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub has_pending_request: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<User>,
    #[serde(default, rename = "createdByUserID")]
    pub created_by_user_id: Option<UserId>,
}

impl Group {
    /// The caller's membership, derived from the server flags.
    pub fn membership(&self) -> MembershipState {
        if self.is_member {
            MembershipState::Member
        } else if self.has_pending_request {
            MembershipState::Pending
        } else {
            MembershipState::None
        }
    }

    /// Apply a membership state locally, keeping the member count in step.
    pub fn set_membership(&mut self, state: MembershipState) {
        let was_member = self.is_member;
        self.is_member = state == MembershipState::Member;
        self.has_pending_request = state == MembershipState::Pending;
        match (was_member, self.is_member) {
            (false, true) => self.member_count = self.member_count.saturating_add(1),
            (true, false) => self.member_count = self.member_count.saturating_sub(1),
            _ => {}
        }
    }

    /// Whether `user` created the group (shown with an admin badge).
    pub fn is_creator(&self, user: UserId) -> bool {
        self.created_by_user_id == Some(user)
    }
}

/// Caller's relation to a group.
///
/// ```text
/// None ──request_join──▶ Pending ──approved──▶ Member
///  ▲  ◀──cancel_request──   │                    │
///  │                                             │
///  ├──────────join / accept invite──────────────▶│
///  └◀───────────────────leave────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MembershipState {
    #[default]
    None,
    Pending,
    Member,
}

impl MembershipState {
    /// `None → Pending`.
    pub fn request_join(self) -> Result<Self, VmsError> {
        match self {
            Self::None => Ok(Self::Pending),
            other => Err(VmsError::invalid_transition("request to join", other)),
        }
    }

    /// `Pending → None`.
    pub fn cancel_request(self) -> Result<Self, VmsError> {
        match self {
            Self::Pending => Ok(Self::None),
            other => Err(VmsError::invalid_transition("cancel a join request", other)),
        }
    }

    /// `None → Member` (open join or invite accept).
    pub fn join(self) -> Result<Self, VmsError> {
        match self {
            Self::None => Ok(Self::Member),
            other => Err(VmsError::invalid_transition("join", other)),
        }
    }

    /// `Member → None`. Admins are refused server-side, not here.
    pub fn leave(self) -> Result<Self, VmsError> {
        match self {
            Self::Member => Ok(Self::None),
            other => Err(VmsError::invalid_transition("leave", other)),
        }
    }
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "not a member"),
            Self::Pending => write!(f, "a join request is pending"),
            Self::Member => write!(f, "a member"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        serde_json::from_str(r#"{"id":4,"name":"Beach Crew","memberCount":3}"#).unwrap()
    }

    #[test]
    fn test_membership_derivation() {
        let mut g = group();
        assert_eq!(g.membership(), MembershipState::None);
        g.has_pending_request = true;
        assert_eq!(g.membership(), MembershipState::Pending);
        g.is_member = true;
        assert_eq!(g.membership(), MembershipState::Member);
    }

    #[test]
    fn test_set_membership_adjusts_count() {
        let mut g = group();
        g.set_membership(MembershipState::Pending);
        assert_eq!(g.member_count, 3);
        assert!(g.has_pending_request);

        g.set_membership(MembershipState::Member);
        assert_eq!(g.member_count, 4);
        assert!(!g.has_pending_request);

        g.set_membership(MembershipState::None);
        assert_eq!(g.member_count, 3);
    }

    #[test]
    fn test_transitions() {
        assert_eq!(MembershipState::None.request_join(), Ok(MembershipState::Pending));
        assert_eq!(MembershipState::Pending.cancel_request(), Ok(MembershipState::None));
        assert_eq!(MembershipState::None.join(), Ok(MembershipState::Member));
        assert_eq!(MembershipState::Member.leave(), Ok(MembershipState::None));

        assert!(MembershipState::Member.request_join().is_err());
        assert!(MembershipState::Pending.request_join().is_err());
        assert!(MembershipState::None.cancel_request().is_err());
        assert!(MembershipState::None.leave().is_err());
        assert!(MembershipState::Pending.leave().is_err());
    }

    #[test]
    fn test_creator_field_spelling() {
        let g: Group =
            serde_json::from_str(r#"{"id":1,"name":"g","createdByUserID":9,"members":null}"#)
                .unwrap();
        assert!(g.is_creator(UserId(9)));
        assert!(g.members.is_empty());
    }
}
