//! VMS command-line client
//!
//! Drives the headless application core against a live backend: log in,
//! browse and register for events, follow people, manage groups and answer
//! invitations. Every page command goes through the same route guards as the
//! browser client.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vms_app::{AppCore, FileStorage};
use vms_core::EventId;

mod commands;
mod config;
mod handlers;

use commands::{
    AuthCommand, EventsCommand, FriendsCommand, GroupsCommand, NotificationsCommand,
    PeopleCommand, ProfileCommand,
};
use handlers::{auth, events, groups, notifications, people, profile};

#[derive(Parser)]
#[command(name = "vms")]
#[command(about = "VMS - Volunteer Management from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".vms/config.toml")]
    config: PathBuf,

    /// Backend origin, overriding config and environment
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Auth(AuthCommand),

    /// Resolve a path through the route guards and show the page
    Open {
        /// Application path, e.g. `/events` or `/groups/3`
        path: String,
    },

    /// Role-specific event dashboard (`/home`)
    Dashboard {
        /// Show registrants of one of your events (organizers)
        #[arg(long)]
        volunteers: Option<EventId>,
    },

    /// Event feed and registration
    #[command(subcommand)]
    Events(EventsCommand),

    /// People directory and follows
    #[command(subcommand)]
    People(PeopleCommand),

    /// Legacy friends list
    #[command(subcommand)]
    Friends(FriendsCommand),

    /// Groups, membership and invites
    #[command(subcommand)]
    Groups(GroupsCommand),

    /// Pending group invitations
    #[command(subcommand)]
    Notifications(NotificationsCommand),

    /// Your profile, skills and connections
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so page output stays pipeable
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::load(&cli.config, cli.api_url.as_deref())?;
    let session_path = config::session_path(&app_config)?;
    tracing::debug!(path = %session_path.display(), "Using session file");
    let app = AppCore::with_reqwest(app_config, FileStorage::open(session_path)?)?;

    match cli.command {
        Commands::Auth(cmd) => auth::handle(&app, cmd).await?,
        Commands::Open { path } => handlers::open(&app, &path).await?,
        Commands::Dashboard { volunteers } => events::dashboard(&app, volunteers).await?,
        Commands::Events(cmd) => events::handle(&app, cmd).await?,
        Commands::People(cmd) => people::handle(&app, cmd).await?,
        Commands::Friends(cmd) => people::handle_friends(&app, cmd).await?,
        Commands::Groups(cmd) => groups::handle(&app, cmd).await?,
        Commands::Notifications(cmd) => notifications::handle(&app, cmd).await?,
        Commands::Profile(cmd) => profile::handle(&app, cmd).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vms",
            "groups",
            "list",
            "--search",
            "beach",
            "--api-url",
            "http://10.0.0.2:8080",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2:8080"));
        assert_eq!(cli.config, PathBuf::from(".vms/config.toml"));
    }

    #[test]
    fn test_register_role_parses() {
        let cli = Cli::try_parse_from([
            "vms",
            "register",
            "org@vms.com",
            "--password",
            "pw",
            "--role",
            "Organizer",
        ]);
        assert!(cli.is_ok());

        let bad = Cli::try_parse_from([
            "vms",
            "register",
            "org@vms.com",
            "--password",
            "pw",
            "--role",
            "Admin",
        ]);
        assert!(bad.is_err());
    }
}
