//! Group handlers.

use super::people::print_users;
use super::{ensure_loaded, open_page, report};
use crate::commands::GroupsCommand;
use anyhow::{bail, Result};
use vms_app::http::FilePart;
use vms_app::views::GroupDetails;
use vms_app::workflows::create_group::GroupDraft;
use vms_app::{AppCore, Page};
use vms_core::{Group, GroupId};

async fn details(app: &AppCore, id: GroupId) -> Result<GroupDetails> {
    let Page::GroupDetails(view) = open_page(app, &format!("/groups/{id}")).await? else {
        bail!("/groups/{id} did not render a group");
    };
    ensure_loaded("group", view.status())?;
    Ok(view)
}

pub async fn handle(app: &AppCore, command: GroupsCommand) -> Result<()> {
    match command {
        GroupsCommand::List { search } => {
            let Page::Groups(view) = open_page(app, "/groups").await? else {
                bail!("/groups did not render the group list");
            };
            if let Some(term) = search {
                view.search(&term).await?;
            }
            ensure_loaded("groups", view.status())?;
            print_groups(&view.groups());
        }
        GroupsCommand::Create {
            name,
            description,
            image,
        } => {
            let Page::Groups(view) = open_page(app, "/groups").await? else {
                bail!("/groups did not render the group list");
            };
            let mut draft = GroupDraft::new(name.clone(), description);
            draft.image = image.as_deref().map(FilePart::from_path).transpose()?;
            view.create(draft).await?;
            println!("Created group {name}");
        }
        GroupsCommand::Show { id } => print_details(&details(app, id).await?)?,
        GroupsCommand::Join { id } => {
            let outcome = details(app, id).await?.join().await?;
            report(outcome, "Joined", "Already a member");
        }
        GroupsCommand::Leave { id } => {
            details(app, id).await?.leave().await?;
            println!("Left the group");
        }
        GroupsCommand::Request { id } => {
            let outcome = details(app, id).await?.request_join().await?;
            report(outcome, "Join request sent", "A join request is already pending");
        }
        GroupsCommand::Cancel { id } => {
            details(app, id).await?.cancel_request().await?;
            println!("Join request withdrawn");
        }
        GroupsCommand::Requests { id } => {
            let view = admin(app, id).await?;
            print_users(&view.requests());
        }
        GroupsCommand::Approve { id, user } => {
            admin(app, id).await?.approve(user).await?;
            println!("Approved user {user}");
        }
        GroupsCommand::Deny { id, user } => {
            admin(app, id).await?.deny(user).await?;
            println!("Denied user {user}");
        }
        GroupsCommand::Invitable { id } => {
            let view = details(app, id).await?;
            view.load_invitable().await?;
            ensure_loaded("invitable followers", view.invitable_status())?;
            print_users(&view.invitable());
        }
        GroupsCommand::Invite { id, user } => {
            let view = details(app, id).await?;
            view.load_invitable().await?;
            let outcome = view.invite(user).await?;
            report(outcome, "Invitation sent", "Already invited");
        }
    }
    Ok(())
}

async fn admin(app: &AppCore, id: GroupId) -> Result<GroupDetails> {
    let view = details(app, id).await?;
    if !view.is_admin() {
        bail!("Only group admins can manage join requests");
    }
    ensure_loaded("join requests", view.requests_status())?;
    Ok(view)
}

pub fn print_groups(groups: &[Group]) {
    if groups.is_empty() {
        println!("No groups found");
        return;
    }
    for group in groups {
        let marker = if group.is_member { "*" } else { " " };
        println!(
            "{marker}{:>5}  {}  ({} members)",
            group.id, group.name, group.member_count
        );
    }
}

pub fn print_details(view: &GroupDetails) -> Result<()> {
    ensure_loaded("group", view.status())?;
    let Some(group) = view.group() else {
        bail!("Group {} not found", view.id());
    };
    println!("=== {} ===", group.name);
    if !group.description.is_empty() {
        println!("{}", group.description);
    }
    println!("You are {}", view.membership()?);
    println!("Members ({}):", group.member_count);
    for member in view.members() {
        let badge = if group.is_creator(member.id) { " (admin)" } else { "" };
        println!("{:>7}  {}{badge}", member.id, member.display_name());
    }
    if view.is_admin() {
        let requests = view.requests();
        if !requests.is_empty() {
            println!("Pending requests ({}):", requests.len());
            for user in requests {
                println!("{:>7}  {}", user.id, user.display_name());
            }
        }
    }
    Ok(())
}
