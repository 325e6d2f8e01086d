//! Session command handlers.

use crate::commands::AuthCommand;
use anyhow::Result;
use vms_app::workflows::auth;
use vms_app::AppCore;

pub async fn handle(app: &AppCore, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::Login { email, password } => {
            let navigation = auth::login(app, &email, &password).await?;
            let role = app
                .session()
                .get()
                .role
                .map_or_else(|| "unknown role".to_string(), |r| r.to_string());
            println!("Logged in as {email} ({role})");
            println!("Landing page: {}", navigation.route.path());
        }
        AuthCommand::Register {
            email,
            password,
            role,
        } => {
            auth::register(app, &email, &password, role).await?;
            println!("Registered {email} as {role}. Run `vms login` to continue.");
        }
        AuthCommand::Logout => {
            auth::logout(app)?;
            println!("Logged out");
        }
        AuthCommand::Whoami => {
            let session = app.session().get();
            if session.is_authenticated() {
                match session.role {
                    Some(role) => println!("Logged in ({role})"),
                    None => println!("Logged in (no role)"),
                }
            } else {
                println!("Not logged in");
            }
        }
    }
    Ok(())
}
