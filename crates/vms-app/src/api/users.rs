//! People and follow edges.

use super::list_field;
use crate::http::ApiClient;
use serde_json::Value;
use vms_core::{HttpError, User, UserId};

/// `GET /users[?search=]`
pub async fn search(api: &ApiClient, term: &str) -> Result<Vec<User>, HttpError> {
    let body: Value = api.get("/users", &[("search", term)]).await?;
    list_field(body, "users")
}

/// `POST /users/follow/{id}`
pub async fn follow(api: &ApiClient, id: UserId) -> Result<(), HttpError> {
    api.post(&format!("/users/follow/{id}")).await
}

/// `POST /users/unfollow/{id}`
pub async fn unfollow(api: &ApiClient, id: UserId) -> Result<(), HttpError> {
    api.post(&format!("/users/unfollow/{id}")).await
}

/// `GET /users/followers`
pub async fn followers(api: &ApiClient) -> Result<Vec<User>, HttpError> {
    let body: Value = api.get("/users/followers", &[]).await?;
    list_field(body, "users")
}

/// `GET /users/following`
pub async fn following(api: &ApiClient) -> Result<Vec<User>, HttpError> {
    let body: Value = api.get("/users/following", &[]).await?;
    list_field(body, "users")
}
