//! Scripted in-process backend.

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use vms_core::HttpError;

#[derive(Debug, Clone)]
enum Scripted {
    Respond {
        status: u16,
        body: Value,
        delay: Option<Duration>,
    },
    Unreachable,
}

/// Transport answering from a script keyed by method and path.
///
/// Each route holds a queue of responses. Responses are consumed in order and
/// the last one repeats. Unscripted routes answer `404 {"error":"no route"}`.
/// Every request is logged, including its query and bearer.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    log: Mutex<Vec<HttpRequest>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`.
    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.push(
            method,
            path,
            Scripted::Respond {
                status,
                body,
                delay: None,
            },
        );
    }

    /// Queue a response that arrives after `delay`.
    pub fn respond_after(
        &self,
        method: HttpMethod,
        path: &str,
        delay: Duration,
        status: u16,
        body: Value,
    ) {
        self.push(
            method,
            path,
            Scripted::Respond {
                status,
                body,
                delay: Some(delay),
            },
        );
    }

    /// Queue a failure where no response arrives.
    pub fn unreachable(&self, method: HttpMethod, path: &str) {
        self.push(method, path, Scripted::Unreachable);
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().clone()
    }

    /// Requests received for `method path`.
    pub fn requests_to(&self, method: HttpMethod, path: &str) -> Vec<HttpRequest> {
        self.log
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().len()
    }

    pub fn clear_log(&self) {
        self.log.lock().clear();
    }

    fn push(&self, method: HttpMethod, path: &str, scripted: Scripted) {
        self.routes
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(scripted);
    }

    fn next_for(&self, method: HttpMethod, path: &str) -> Option<Scripted> {
        let mut routes = self.routes.lock();
        let queue = routes.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl HttpTransport for InMemoryTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let scripted = self.next_for(request.method, &request.path);
        let label = format!("{} {}", request.method, request.path);
        self.log.lock().push(request);

        match scripted {
            Some(Scripted::Respond {
                status,
                body,
                delay,
            }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                Ok(HttpResponse::new(status, body))
            }
            Some(Scripted::Unreachable) => Err(HttpError::network(format!(
                "connection refused: {label}"
            ))),
            None => Ok(HttpResponse::new(404, json!({"error": "no route"}))),
        }
    }
}
