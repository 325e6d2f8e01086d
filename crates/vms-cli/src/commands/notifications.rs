//! Invitation commands.

use clap::Subcommand;
use vms_core::NotificationId;

#[derive(Debug, Clone, Subcommand)]
pub enum NotificationsCommand {
    /// List pending group invitations.
    List,

    /// Accept an invitation and join the group.
    Accept {
        /// Invitation to accept
        id: NotificationId,
    },

    /// Decline an invitation.
    Decline {
        /// Invitation to decline
        id: NotificationId,
    },
}
