//! Invitation handlers.

use super::{ensure_loaded, open_page, report};
use crate::commands::NotificationsCommand;
use anyhow::{bail, Result};
use vms_app::{AppCore, Page};
use vms_core::Notification;

pub async fn handle(app: &AppCore, command: NotificationsCommand) -> Result<()> {
    let Page::Notifications(view) = open_page(app, "/notifications").await? else {
        bail!("/notifications did not render the invitation list");
    };
    ensure_loaded("notifications", view.status())?;

    match command {
        NotificationsCommand::List => print_notifications(&view.notifications()),
        NotificationsCommand::Accept { id } => {
            let outcome = view.accept(id).await?;
            report(outcome, "Invitation accepted", "Already a member");
        }
        NotificationsCommand::Decline { id } => {
            view.decline(id).await?;
            println!("Invitation declined");
        }
    }
    Ok(())
}

pub fn print_notifications(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("No pending invitations");
        return;
    }
    for notification in notifications {
        println!("{:>5}  {}", notification.id, notification.summary());
    }
}
