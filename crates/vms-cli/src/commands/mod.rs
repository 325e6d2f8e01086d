//! Subcommand definitions. Handlers live in `crate::handlers`.

pub mod auth;
pub mod events;
pub mod groups;
pub mod notifications;
pub mod people;
pub mod profile;

pub use auth::AuthCommand;
pub use events::EventsCommand;
pub use groups::GroupsCommand;
pub use notifications::NotificationsCommand;
pub use people::{FriendsCommand, PeopleCommand};
pub use profile::ProfileCommand;
