//! Group commands.

use clap::Subcommand;
use std::path::PathBuf;
use vms_core::{GroupId, UserId};

#[derive(Debug, Clone, Subcommand)]
pub enum GroupsCommand {
    /// List groups.
    List {
        /// Filter by name
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a group; you become its admin.
    Create {
        /// Group name
        #[arg(long)]
        name: String,
        /// What the group is about
        #[arg(long)]
        description: String,
        /// Group picture
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Show a group and its members.
    Show {
        /// Group to show
        id: GroupId,
    },

    /// Join an open group.
    Join {
        /// Group to join
        id: GroupId,
    },

    /// Leave a group.
    Leave {
        /// Group to leave
        id: GroupId,
    },

    /// Ask the admins to let you in.
    Request {
        /// Group to request
        id: GroupId,
    },

    /// Withdraw a pending join request.
    Cancel {
        /// Group with the pending request
        id: GroupId,
    },

    /// List pending join requests (admins).
    Requests {
        /// Group you administer
        id: GroupId,
    },

    /// Approve a join request (admins).
    Approve {
        /// Group you administer
        id: GroupId,
        /// Requesting user
        user: UserId,
    },

    /// Deny a join request (admins).
    Deny {
        /// Group you administer
        id: GroupId,
        /// Requesting user
        user: UserId,
    },

    /// List followers you could invite.
    Invitable {
        /// Group to invite into
        id: GroupId,
    },

    /// Invite a follower into a group.
    Invite {
        /// Group to invite into
        id: GroupId,
        /// Follower to invite
        user: UserId,
    },
}
