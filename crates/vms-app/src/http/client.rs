//! Authenticated request wrapper.

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, MultipartForm, RequestBody};
use crate::session::SessionReader;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use vms_core::HttpError;

/// Issues requests with the current session's bearer token attached and
/// turns non-2xx responses into [`HttpError::Server`].
///
/// No retry and no backoff. A 401 is an ordinary server error.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: SessionReader,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, session: SessionReader) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionReader {
        &self.session
    }

    /// Send a request and return the raw JSON body of a 2xx response.
    pub async fn send(&self, mut request: HttpRequest) -> Result<Value, HttpError> {
        request.bearer = self.session.bearer();
        let method = request.method;
        let path = request.path.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, %path, error = %e, "Request did not reach the server");
                return Err(e);
            }
        };
        tracing::debug!(%method, %path, status = response.status, "Request completed");

        into_result(response)
    }

    /// `request(method, path, body?, multipart?)` in one call.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, HttpError> {
        self.send(HttpRequest::new(method, path).with_body(body)).await
    }

    /// `GET` with query parameters. Parameters with empty values are
    /// dropped.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let mut request = HttpRequest::new(HttpMethod::Get, path);
        for (key, value) in query {
            if !value.is_empty() {
                request = request.with_query(*key, *value);
            }
        }
        decode(self.send(request).await?)
    }

    /// `POST` with a JSON body, decoding the response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, HttpError> {
        decode(
            self.request(HttpMethod::Post, path, RequestBody::Json(body))
                .await?,
        )
    }

    /// `POST` without a body, ignoring whatever the server answers.
    pub async fn post(&self, path: &str) -> Result<(), HttpError> {
        self.request(HttpMethod::Post, path, RequestBody::Empty)
            .await
            .map(drop)
    }

    /// `POST` a multipart form, ignoring the response body.
    pub async fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<(), HttpError> {
        self.request(HttpMethod::Post, path, RequestBody::Multipart(form))
            .await
            .map(drop)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

fn into_result(response: HttpResponse) -> Result<Value, HttpError> {
    if response.is_success() {
        return Ok(response.body);
    }
    let message = response
        .body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", response.status));
    Err(HttpError::server(response.status, message))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, HttpError> {
    serde_json::from_value(body).map_err(|e| HttpError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::InMemoryTransport;
    use serde_json::json;
    use vms_core::{Role, Session};

    fn client(transport: &Arc<InMemoryTransport>, session: Session) -> ApiClient {
        ApiClient::new(transport.clone(), SessionReader::fixed(session))
    }

    #[tokio::test]
    async fn test_bearer_attached_when_authenticated() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(HttpMethod::Get, "/events", 200, json!({"events": []}));

        let api = client(&transport, Session::authenticated("tok", Role::Volunteer));
        let _: Value = api.get("/events", &[]).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_no_bearer_when_anonymous() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(HttpMethod::Post, "/login", 200, json!({}));

        let api = client(&transport, Session::anonymous());
        api.post("/login").await.unwrap();
        assert_eq!(transport.requests()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_error_field_becomes_message() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(
            HttpMethod::Post,
            "/events/1/register",
            409,
            json!({"error": "already registered"}),
        );

        let api = client(&transport, Session::anonymous());
        let err = api.post("/events/1/register").await.unwrap_err();
        assert_eq!(err, HttpError::server(409, "already registered"));
        assert!(err.category().is_success_equivalent());
    }

    #[tokio::test]
    async fn test_missing_error_field_falls_back() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(HttpMethod::Get, "/users", 500, Value::Null);

        let api = client(&transport, Session::anonymous());
        let err = api.get::<Value>("/users", &[]).await.unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.unreachable(HttpMethod::Get, "/groups");

        let api = client(&transport, Session::anonymous());
        let err = api.get::<Value>("/groups", &[]).await.unwrap_err();
        assert!(matches!(err, HttpError::Network { .. }));
    }

    #[tokio::test]
    async fn test_empty_query_values_are_dropped() {
        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(HttpMethod::Get, "/groups", 200, json!({"groups": []}));

        let api = client(&transport, Session::anonymous());
        let _: Value = api.get("/groups", &[("search", "")]).await.unwrap();
        let _: Value = api.get("/groups", &[("search", "beach")]).await.unwrap();

        let sent = transport.requests();
        assert!(sent[0].query.is_empty());
        assert_eq!(sent[1].query_value("search"), Some("beach"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Token {
            #[allow(dead_code)]
            token: String,
        }

        let transport = Arc::new(InMemoryTransport::new());
        transport.respond(HttpMethod::Post, "/login", 200, json!({"unexpected": true}));

        let api = client(&transport, Session::anonymous());
        let err = api.post_json::<Token>("/login", json!({})).await.unwrap_err();
        assert!(matches!(err, HttpError::Decode { .. }));
    }
}
