//! Production transport over `reqwest`.

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm, RequestBody};
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;
use vms_core::{HttpError, VmsError};

/// Sends requests to a fixed backend origin.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, VmsError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VmsError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, VmsError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.client.request(method(request.method), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(to_form(form)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::network(e.to_string()))?;

        Ok(HttpResponse::new(status, parse_body(&bytes)))
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    }
}

fn to_form(form: MultipartForm) -> Result<Form, HttpError> {
    let mut out = Form::new();
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    for (name, file) in form.files {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let part = match file.content_type {
            Some(content_type) => part.mime_str(&content_type).map_err(|e| {
                HttpError::network(format!("Invalid content type {content_type}: {e}"))
            })?,
            None => part,
        };
        out = out.part(name, part);
    }
    Ok(out)
}

/// Empty bodies become `Null`; bodies that are not JSON are kept as text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
