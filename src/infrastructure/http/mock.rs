use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::ports::api_client::{ApiClient, ApiRequest, ApiResponse};
use async_trait::async_trait;
use http::Method;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Scripted outcome of a mocked call
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(ApiResponse),
    Fail(ClientError),
}

impl MockReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockReply::Respond(ApiResponse::new(status, body.to_string()))
    }

    pub fn status(status: u16) -> Self {
        MockReply::Respond(ApiResponse::new(status, ""))
    }

    pub fn network_failure() -> Self {
        MockReply::Fail(ClientError::Network("Connection refused".to_string()))
    }
}

type RouteKey = (Method, String);

#[derive(Default)]
struct Script {
    /// One-shot replies, consumed before the standing reply
    queued: HashMap<RouteKey, VecDeque<(MockReply, Option<Duration>)>>,
    standing: HashMap<RouteKey, MockReply>,
}

/// In-memory `ApiClient` that replays scripted replies and records every
/// request it receives. Unscripted routes answer 404.
#[derive(Clone, Default)]
pub struct MockApiClient {
    script: Arc<Mutex<Script>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call to `method path` with `reply`
    pub async fn on(&self, method: Method, path: &str, reply: MockReply) {
        let mut script = self.script.lock().await;
        script.standing.insert((method, path.to_string()), reply);
    }

    /// Answer the next call to `method path` with `reply`
    pub async fn enqueue(&self, method: Method, path: &str, reply: MockReply) {
        self.enqueue_delayed(method, path, reply, None).await;
    }

    /// Like `enqueue`, but the reply arrives only after `delay`
    pub async fn enqueue_delayed(
        &self,
        method: Method,
        path: &str,
        reply: MockReply,
        delay: Option<Duration>,
    ) {
        let mut script = self.script.lock().await;
        script
            .queued
            .entry((method, path.to_string()))
            .or_default()
            .push_back((reply, delay));
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn clear_requests(&self) {
        self.requests.lock().await.clear();
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        self.requests.lock().await.push(request.clone());

        let key = (request.method.clone(), request.path.clone());
        let (reply, delay) = {
            let mut script = self.script.lock().await;
            match script.queued.get_mut(&key).and_then(VecDeque::pop_front) {
                Some(scripted) => scripted,
                None => match script.standing.get(&key) {
                    Some(reply) => (reply.clone(), None),
                    None => (MockReply::status(404), None),
                },
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(err) => Err(err),
        }
    }
}
