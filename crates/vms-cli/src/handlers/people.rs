//! People and friends handlers.

use super::{ensure_loaded, open_page, report};
use crate::commands::{FriendsCommand, PeopleCommand};
use anyhow::{bail, Context, Result};
use vms_app::views::{Friends, People};
use vms_app::{AppCore, Page};
use vms_core::User;

async fn people(app: &AppCore) -> Result<People> {
    let Page::Network(view) = open_page(app, "/network").await? else {
        bail!("/network did not render the people directory");
    };
    ensure_loaded("people", view.status())?;
    Ok(view)
}

pub async fn handle(app: &AppCore, command: PeopleCommand) -> Result<()> {
    let view = people(app).await?;
    match command {
        PeopleCommand::Search { term } => {
            view.search(&term).await?;
            ensure_loaded("people", view.status())?;
            print_users(&view.users());
        }
        PeopleCommand::Follow { id } => {
            let outcome = view.follow(id).await?;
            report(outcome, "Following", "Already following");
        }
        PeopleCommand::Unfollow { id } => {
            let outcome = view.unfollow(id).await?;
            report(outcome, "Unfollowed", "Already not following");
        }
    }
    Ok(())
}

pub async fn handle_friends(app: &AppCore, command: FriendsCommand) -> Result<()> {
    // Friends live on the people page
    let directory = people(app).await?;
    let friends = Friends::mount(&app.view_context()).await;
    ensure_loaded("friends", friends.status())?;

    match command {
        FriendsCommand::List => print_users(&friends.friends()),
        FriendsCommand::Add { id } => {
            let user = directory
                .user(id)
                .with_context(|| format!("No user {id} in the directory"))?;
            let name = user.display_name().to_string();
            let outcome = friends.add(user).await?;
            report(
                outcome,
                &format!("Added {name} as a friend"),
                &format!("{name} is already a friend"),
            );
        }
    }
    Ok(())
}

pub fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No people found");
        return;
    }
    for user in users {
        let marker = if user.is_followed { "*" } else { " " };
        let role = user.role.map(|r| r.to_string()).unwrap_or_default();
        println!("{marker}{:>5}  {}  <{}>  {role}", user.id, user.display_name(), user.email);
    }
}
