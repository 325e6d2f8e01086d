//! Command handlers.
//!
//! Every handler enters the app through [`AppCore::open`] so the same route
//! guards apply as in the browser client, then drives the mounted view.

pub mod auth;
pub mod events;
pub mod groups;
pub mod notifications;
pub mod people;
pub mod profile;

use anyhow::{bail, Result};
use vms_app::{AppCore, LoadStatus, MutationOutcome, Page};

/// Open `path` and return the page, failing if a guard redirected.
pub async fn open_page(app: &AppCore, path: &str) -> Result<Page> {
    let opened = app.open(path).await?;
    if opened.navigation.is_redirected() {
        let target = opened.navigation.route.path();
        match target.as_str() {
            "/login" => bail!("{path} requires a session; run `vms login` first"),
            "/home" => bail!("{path} is not available to your role"),
            _ => bail!("{path} redirected to {target}"),
        }
    }
    Ok(opened.page)
}

/// Fail with the load error of a list that did not become ready.
pub fn ensure_loaded(what: &str, status: LoadStatus) -> Result<()> {
    match status {
        LoadStatus::Ready => Ok(()),
        LoadStatus::Failed(message) => bail!("Could not load {what}: {message}"),
        LoadStatus::Loading => bail!("{what} is still loading"),
    }
}

/// Print a mutation result.
pub fn report(outcome: MutationOutcome, done: &str, already: &str) {
    match outcome {
        MutationOutcome::Confirmed => println!("{done}"),
        MutationOutcome::AlreadySatisfied => println!("{already}"),
    }
}

/// Resolve a path and print whichever page renders.
pub async fn open(app: &AppCore, path: &str) -> Result<()> {
    let opened = app.open(path).await?;
    if opened.navigation.is_redirected() {
        println!(
            "{} -> {}",
            opened.navigation.requested.path(),
            opened.navigation.route.path()
        );
    }
    let page = opened.page;
    println!("=== {} ===", page.title());

    match &page {
        Page::Landing => println!("Run `vms login` or `vms register` to get started."),
        Page::Login => println!("Run `vms login <email> --password <password>`."),
        Page::Register => println!("Run `vms register <email> --password <password>`."),
        Page::CreateEvent => println!("Run `vms events create --name .. --date .. --description ..`."),
        Page::Dashboard(view) => {
            ensure_loaded("events", view.status())?;
            events::print_events(&view.events());
        }
        Page::EventFeed(view) => {
            ensure_loaded("events", view.status())?;
            events::print_events(&view.events());
        }
        Page::Network(view) => {
            ensure_loaded("people", view.status())?;
            people::print_users(&view.users());
        }
        Page::Groups(view) => {
            ensure_loaded("groups", view.status())?;
            groups::print_groups(&view.groups());
        }
        Page::GroupDetails(view) => groups::print_details(view)?,
        Page::Notifications(view) => {
            ensure_loaded("notifications", view.status())?;
            notifications::print_notifications(&view.notifications());
        }
        Page::Profile(view) => profile::print_profile(view)?,
        Page::NotFound(path) => bail!("No page at {path}"),
    }
    Ok(())
}
