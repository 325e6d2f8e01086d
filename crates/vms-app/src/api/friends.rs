//! Legacy symmetric friendship relation.
//!
//! Older backends expose friends next to the directed follow graph. The two
//! relations are independent: adding a friend does not follow, and following
//! does not befriend.

use super::list_field;
use crate::http::ApiClient;
use serde_json::Value;
use vms_core::{HttpError, User, UserId};

/// `GET /friends`
pub async fn list(api: &ApiClient) -> Result<Vec<User>, HttpError> {
    let body: Value = api.get("/friends", &[]).await?;
    list_field(body, "friends")
}

/// `POST /friends/add/{id}`
pub async fn add(api: &ApiClient, id: UserId) -> Result<(), HttpError> {
    api.post(&format!("/friends/add/{id}")).await
}
