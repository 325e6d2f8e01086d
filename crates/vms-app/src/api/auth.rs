//! `/login` and `/register`.

use crate::http::{ApiClient, HttpMethod, RequestBody};
use serde::Deserialize;
use serde_json::json;
use vms_core::{HttpError, Role};

/// Successful login answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// `POST /login {email,password} -> {token, role}`
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, HttpError> {
    api.post_json("/login", json!({ "email": email, "password": password }))
        .await
}

/// `POST /register {email,password,role}`
pub async fn register(
    api: &ApiClient,
    email: &str,
    password: &str,
    role: Role,
) -> Result<(), HttpError> {
    api.request(
        HttpMethod::Post,
        "/register",
        RequestBody::Json(json!({
            "email": email,
            "password": password,
            "role": role.as_str(),
        })),
    )
    .await
    .map(drop)
}
