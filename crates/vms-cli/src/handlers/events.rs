//! Event command handlers.

use super::{ensure_loaded, open_page, report};
use crate::commands::EventsCommand;
use anyhow::{bail, Result};
use vms_app::http::FilePart;
use vms_app::workflows::create_event::{create_event, EventDraft};
use vms_app::{AppCore, Page};
use vms_core::{Event, EventId};

pub async fn handle(app: &AppCore, command: EventsCommand) -> Result<()> {
    match command {
        EventsCommand::List { search } => {
            let Page::EventFeed(feed) = open_page(app, "/events").await? else {
                bail!("/events did not render the event feed");
            };
            if let Some(term) = search {
                feed.search(&term).await?;
            }
            ensure_loaded("events", feed.status())?;
            print_events(&feed.events());
        }
        EventsCommand::Register { id } => {
            let Page::EventFeed(feed) = open_page(app, "/events").await? else {
                bail!("/events did not render the event feed");
            };
            ensure_loaded("events", feed.status())?;
            let outcome = feed.register(id).await?;
            let name = feed.event(id).map(|e| e.name).unwrap_or_default();
            report(
                outcome,
                &format!("Registered for {name}"),
                &format!("Already registered for {name}"),
            );
        }
        EventsCommand::Create {
            name,
            date,
            description,
            location,
            image,
        } => {
            let mut draft = EventDraft::new(name, date, description);
            draft.location_address = location;
            draft.image = image.as_deref().map(FilePart::from_path).transpose()?;
            create_event(app, draft).await?;
            println!("Event created");
        }
    }
    Ok(())
}

/// `vms dashboard`: the role-specific `/home` page.
pub async fn dashboard(app: &AppCore, volunteers: Option<EventId>) -> Result<()> {
    let Page::Dashboard(view) = open_page(app, "/home").await? else {
        bail!("/home did not render the dashboard");
    };
    ensure_loaded("events", view.status())?;

    match volunteers {
        Some(id) => {
            let list = view.volunteers(id).await?;
            if list.is_empty() {
                println!("No volunteers registered yet");
            }
            for volunteer in list {
                let name = if volunteer.name.is_empty() {
                    &volunteer.email
                } else {
                    &volunteer.name
                };
                if volunteer.skills.is_empty() {
                    println!("{:>5}  {name}", volunteer.id);
                } else {
                    println!("{:>5}  {name}  [{}]", volunteer.id, volunteer.skills.join(", "));
                }
            }
        }
        None => {
            println!("=== {} ===", view.title());
            print_events(&view.events());
        }
    }
    Ok(())
}

pub fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events found");
        return;
    }
    for event in events {
        let marker = if event.is_registered { "*" } else { " " };
        println!("{marker}{:>5}  {}  {}", event.id, event.date, event.name);
        println!("        by {}", event.organizer_label());
        if let Some(address) = &event.location_address {
            println!("        at {address}");
        }
        if let Some(line) = event.social_proof() {
            println!("        {line}");
        }
    }
}
