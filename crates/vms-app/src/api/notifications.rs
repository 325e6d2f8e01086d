//! Pending group invitations.

use super::list_field;
use crate::http::ApiClient;
use serde_json::Value;
use vms_core::{HttpError, Notification, NotificationId};

/// `GET /notifications`
pub async fn list(api: &ApiClient) -> Result<Vec<Notification>, HttpError> {
    let body: Value = api.get("/notifications", &[]).await?;
    list_field(body, "notifications")
}

/// `POST /notifications/{id}/accept`: joins the group.
pub async fn accept(api: &ApiClient, id: NotificationId) -> Result<(), HttpError> {
    api.post(&format!("/notifications/{id}/accept")).await
}

/// `POST /notifications/{id}/decline`
pub async fn decline(api: &ApiClient, id: NotificationId) -> Result<(), HttpError> {
    api.post(&format!("/notifications/{id}/decline")).await
}
