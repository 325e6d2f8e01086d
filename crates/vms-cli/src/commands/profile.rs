//! Profile commands.

use clap::Subcommand;
use std::path::PathBuf;
use vms_app::views::ProfileTab;

#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    /// Show your account and skills.
    Show,

    /// Add skills and save the list.
    AddSkill {
        /// Skills to add; blanks and duplicates are ignored
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// Remove skills and save the list.
    RemoveSkill {
        /// Skills to remove
        #[arg(required = true)]
        skills: Vec<String>,
    },

    /// Upload a new profile picture.
    Picture {
        /// Image file
        path: PathBuf,
    },

    /// Show one of the connection tabs.
    Tab {
        /// `followers`, `following` or `groups`
        tab: ProfileTab,
    },
}
