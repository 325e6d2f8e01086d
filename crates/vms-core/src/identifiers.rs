//! Typed identifiers for backend entities.
//!
//! The backend uses integer primary keys. Wrapping them keeps an event id from
//! being passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from its raw value.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw value as used in URL paths and request bodies.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

entity_id!(
    /// Event primary key
    EventId
);
entity_id!(
    /// Group primary key
    GroupId
);
entity_id!(
    /// User primary key
    UserId
);
entity_id!(
    /// Notification (pending invite) primary key
    NotificationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_serde() {
        let id: EventId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EventId(42));
        assert_eq!(serde_json::to_string(&GroupId(7)).unwrap(), "7");
    }

    #[test]
    fn test_parse_and_display() {
        let id: UserId = " 13 ".parse().unwrap();
        assert_eq!(id.to_string(), "13");
        assert!("abc".parse::<NotificationId>().is_err());
    }
}
