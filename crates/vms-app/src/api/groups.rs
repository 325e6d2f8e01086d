//! Group endpoints.

use super::list_field;
use crate::http::{ApiClient, HttpMethod, MultipartForm, RequestBody};
use serde_json::{json, Value};
use vms_core::{Group, GroupId, HttpError, User, UserId};

/// `GET /groups[?search=]`
pub async fn list(api: &ApiClient, search: &str) -> Result<Vec<Group>, HttpError> {
    let body: Value = api.get("/groups", &[("search", search)]).await?;
    list_field(body, "groups")
}

/// `POST /groups` as multipart.
pub async fn create(api: &ApiClient, form: MultipartForm) -> Result<(), HttpError> {
    api.post_multipart("/groups", form).await
}

/// `GET /groups/{id}`: bare group object with members.
pub async fn get(api: &ApiClient, id: GroupId) -> Result<Group, HttpError> {
    api.get(&format!("/groups/{id}"), &[]).await
}

pub async fn join(api: &ApiClient, id: GroupId) -> Result<(), HttpError> {
    api.post(&format!("/groups/{id}/join")).await
}

pub async fn leave(api: &ApiClient, id: GroupId) -> Result<(), HttpError> {
    api.post(&format!("/groups/{id}/leave")).await
}

pub async fn request_join(api: &ApiClient, id: GroupId) -> Result<(), HttpError> {
    api.post(&format!("/groups/{id}/request-join")).await
}

pub async fn cancel_request(api: &ApiClient, id: GroupId) -> Result<(), HttpError> {
    api.post(&format!("/groups/{id}/cancel-request")).await
}

/// `GET /groups/{id}/requests` (admin): users waiting for approval.
pub async fn requests(api: &ApiClient, id: GroupId) -> Result<Vec<User>, HttpError> {
    let body: Value = api.get(&format!("/groups/{id}/requests"), &[]).await?;
    list_field(body, "requests")
}

/// `POST /groups/{id}/requests/approve {userId}`
pub async fn approve(api: &ApiClient, id: GroupId, user: UserId) -> Result<(), HttpError> {
    post_body(api, &format!("/groups/{id}/requests/approve"), json!({ "userId": user })).await
}

/// `POST /groups/{id}/requests/deny {userId}`
pub async fn deny(api: &ApiClient, id: GroupId, user: UserId) -> Result<(), HttpError> {
    post_body(api, &format!("/groups/{id}/requests/deny"), json!({ "userId": user })).await
}

/// `GET /groups/{id}/invitable-followers`
pub async fn invitable_followers(api: &ApiClient, id: GroupId) -> Result<Vec<User>, HttpError> {
    let body: Value = api
        .get(&format!("/groups/{id}/invitable-followers"), &[])
        .await?;
    list_field(body, "users")
}

/// `POST /groups/{id}/invite {receiverId}`
pub async fn invite(api: &ApiClient, id: GroupId, receiver: UserId) -> Result<(), HttpError> {
    post_body(api, &format!("/groups/{id}/invite"), json!({ "receiverId": receiver })).await
}

async fn post_body(api: &ApiClient, path: &str, body: Value) -> Result<(), HttpError> {
    api.request(HttpMethod::Post, path, RequestBody::Json(body))
        .await
        .map(drop)
}
