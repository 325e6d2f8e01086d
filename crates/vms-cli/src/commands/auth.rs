//! Session commands.

use clap::Subcommand;
use vms_core::Role;

#[derive(Debug, Clone, Subcommand)]
pub enum AuthCommand {
    /// Log in and persist the session token.
    Login {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account. Does not log in.
    Register {
        /// Account email
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// `Volunteer` or `Organizer`
        #[arg(long, default_value_t = Role::Volunteer)]
        role: Role,
    },

    /// Forget the persisted session.
    Logout,

    /// Show the current session.
    Whoami,
}
