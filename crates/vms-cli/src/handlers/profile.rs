//! Profile handlers.

use super::groups::print_groups;
use super::people::print_users;
use super::{ensure_loaded, open_page};
use crate::commands::ProfileCommand;
use anyhow::{bail, Result};
use vms_app::http::FilePart;
use vms_app::views::{Profile, ProfileTab};
use vms_app::{AppCore, Page};

pub async fn handle(app: &AppCore, command: ProfileCommand) -> Result<()> {
    let Page::Profile(view) = open_page(app, "/profile").await? else {
        bail!("/profile did not render your profile");
    };

    match command {
        ProfileCommand::Show => print_profile(&view)?,
        ProfileCommand::AddSkill { skills } => {
            ensure_loaded("skills", view.skills_status())?;
            let added = skills.iter().filter(|s| view.add_skill(s)).count();
            if added == 0 {
                println!("Nothing to add");
                return Ok(());
            }
            view.save_skills().await?;
            println!("Skills: {}", view.skills().as_slice().join(", "));
        }
        ProfileCommand::RemoveSkill { skills } => {
            ensure_loaded("skills", view.skills_status())?;
            let removed = skills.iter().filter(|s| view.remove_skill(s)).count();
            if removed == 0 {
                println!("Nothing to remove");
                return Ok(());
            }
            view.save_skills().await?;
            println!("Skills: {}", view.skills().as_slice().join(", "));
        }
        ProfileCommand::Picture { path } => {
            view.upload_picture(FilePart::from_path(&path)?).await?;
            match view.user().and_then(|u| u.profile_image_url) {
                Some(url) => println!("Picture updated: {url}"),
                None => println!("Picture uploaded"),
            }
        }
        ProfileCommand::Tab { tab } => {
            view.open_tab(tab).await?;
            ensure_loaded(tab.as_str(), view.tab_status(tab))?;
            match tab {
                ProfileTab::Followers => print_users(&view.followers()),
                ProfileTab::Following => print_users(&view.following()),
                ProfileTab::Groups => print_groups(&view.groups()),
            }
        }
    }
    Ok(())
}

pub fn print_profile(view: &Profile) -> Result<()> {
    ensure_loaded("profile", view.status())?;
    let Some(user) = view.user() else {
        bail!("Profile is empty");
    };
    println!("Name:  {}", user.display_name());
    println!("Email: {}", user.email);
    if let Some(role) = user.role {
        println!("Role:  {role}");
    }
    if let Some(url) = &user.profile_image_url {
        println!("Photo: {url}");
    }
    match view.skills_status().error() {
        Some(message) => println!("Skills: unavailable ({message})"),
        None if view.skills().is_empty() => println!("Skills: none yet"),
        None => println!("Skills: {}", view.skills().as_slice().join(", ")),
    }
    Ok(())
}
