//! Backend entities.
//!
//! Wire names are camelCase. Optional fields decode to their defaults so that
//! older backend revisions, which omit the social fields, still parse.

mod event;
mod group;
mod notification;
mod profile;
mod user;

pub use event::Event;
pub use group::{Group, MembershipState};
pub use notification::Notification;
pub use profile::Skills;
pub use user::{User, Volunteer};

/// Deserialization helpers shared by the entity modules.
pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// `null` decodes as `T::default()`. The backend sends empty lists as `null`.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// `""` and `null` both decode as `None`.
    pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
    }
}
