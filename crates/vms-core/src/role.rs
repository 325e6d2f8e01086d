//! Role claim carried by the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two roles the backend issues.
///
/// Serialized exactly as the backend spells them (`"Volunteer"`,
/// `"Organizer"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Registers for events, follows people, joins groups
    #[default]
    Volunteer,
    /// Additionally creates events and sees their registrants
    Organizer,
}

impl Role {
    /// All roles, for exhaustive property tests and pickers.
    pub const ALL: [Role; 2] = [Role::Volunteer, Role::Organizer];

    /// Wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer",
            Self::Organizer => "Organizer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role string the backend never issues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Volunteer" => Ok(Self::Volunteer),
            "Organizer" => Ok(Self::Organizer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spelling() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!("organizer".parse::<Role>().is_err());
        assert_eq!(
            serde_json::from_str::<Role>("\"Organizer\"").unwrap(),
            Role::Organizer
        );
    }
}
