//! Event commands.

use clap::Subcommand;
use std::path::PathBuf;
use vms_core::EventId;

#[derive(Debug, Clone, Subcommand)]
pub enum EventsCommand {
    /// List upcoming events.
    List {
        /// Filter by name
        #[arg(long)]
        search: Option<String>,
    },

    /// Register for an event.
    Register {
        /// Event to register for
        id: EventId,
    },

    /// Create an event (organizers).
    Create {
        /// Event name
        #[arg(long)]
        name: String,
        /// Date as `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// Description shown on the card
        #[arg(long)]
        description: String,
        /// Street address
        #[arg(long)]
        location: Option<String>,
        /// Cover image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
}
