//! The caller's own profile.

use super::list_field;
use crate::http::{ApiClient, FilePart, HttpMethod, MultipartForm, RequestBody};
use serde_json::{json, Value};
use vms_core::{Group, HttpError, Skills, User};

/// `GET /profile/me`
pub async fn me(api: &ApiClient) -> Result<User, HttpError> {
    api.get("/profile/me", &[]).await
}

/// `GET /profile/skills`
pub async fn skills(api: &ApiClient) -> Result<Skills, HttpError> {
    let body: Value = api.get("/profile/skills", &[]).await?;
    list_field(body, "skills").map(Skills::from_list)
}

/// `POST /profile/skills {skills}`: replaces the whole list.
pub async fn save_skills(api: &ApiClient, skills: &Skills) -> Result<(), HttpError> {
    api.request(
        HttpMethod::Post,
        "/profile/skills",
        RequestBody::Json(json!({ "skills": skills.as_slice() })),
    )
    .await
    .map(drop)
}

/// `POST /profile/picture` with the file in the `image` field.
pub async fn upload_picture(api: &ApiClient, image: FilePart) -> Result<(), HttpError> {
    api.post_multipart("/profile/picture", MultipartForm::new().file("image", image))
        .await
}

/// `GET /profile/my-groups`
pub async fn my_groups(api: &ApiClient) -> Result<Vec<Group>, HttpError> {
    let body: Value = api.get("/profile/my-groups", &[]).await?;
    list_field(body, "groups")
}
