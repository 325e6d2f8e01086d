//! Login, registration and logout.

use super::require;
use crate::api;
use crate::core::AppCore;
use crate::routing::Navigation;
use vms_core::{Role, VmsError};

/// Log in, store the session and land on `/home`.
///
/// On failure the session is untouched and the error carries the server's
/// message (or the unreachable-server message).
pub async fn login(app: &AppCore, email: &str, password: &str) -> Result<Navigation, VmsError> {
    require("Email", email)?;
    require("Password", password)?;

    let response = api::auth::login(app.api(), email.trim(), password).await?;
    app.session_store().set(response.token, response.role)?;
    app.navigate("/home")
}

/// Create an account and land on `/login`. Does not log in.
pub async fn register(
    app: &AppCore,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Navigation, VmsError> {
    require("Email", email)?;
    require("Password", password)?;

    api::auth::register(app.api(), email.trim(), password, role).await?;
    tracing::info!(%role, "Account registered");
    app.navigate("/login")
}

/// Clear the session and land on `/login`.
pub fn logout(app: &AppCore) -> Result<Navigation, VmsError> {
    app.session_store().clear()?;
    app.navigate("/login")
}
