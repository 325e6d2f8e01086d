//! People directory and legacy friends.

use clap::Subcommand;
use vms_core::UserId;

#[derive(Debug, Clone, Subcommand)]
pub enum PeopleCommand {
    /// Search people by name or email.
    Search {
        /// Search term; empty lists everyone
        #[arg(default_value = "")]
        term: String,
    },

    /// Follow a user.
    Follow {
        /// User to follow
        id: UserId,
    },

    /// Stop following a user.
    Unfollow {
        /// User to unfollow
        id: UserId,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FriendsCommand {
    /// List friends.
    List,

    /// Add a user from the people directory as a friend.
    Add {
        /// User to add
        id: UserId,
    },
}
