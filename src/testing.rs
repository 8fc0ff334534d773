//! In-process fake of the EmpleaWorks backend for tests.
//!
//! Canned answers are registered per method and path. Every request is
//! recorded so tests can assert on the exact sequence the client issued.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::client::ApiClient;
use crate::common::ClientConfig;
use crate::storage::SessionStore;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    /// `"GET /offers/42"`
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

type Canned = HashMap<(Method, String), VecDeque<(StatusCode, String)>>;

#[derive(Clone, Default)]
struct FakeState {
    canned: Arc<Mutex<Canned>>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeBackend {
    addr: SocketAddr,
    state: FakeState,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let state = FakeState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_api_url(self.base_url())
    }

    /// Queue a JSON answer. When several answers are queued for the same
    /// route they are served in order; the last one repeats.
    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.on_raw(method, path, status, &body.to_string());
    }

    pub fn on_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .canned
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests().iter().map(RecordedRequest::line).collect()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }

    /// Client over a fresh in-memory session store
    pub async fn client(&self) -> ApiClient {
        let store = SessionStore::in_memory().await.unwrap();
        ApiClient::new(&self.config(), store).unwrap()
    }

    /// Client that already holds `token`
    pub async fn client_with_token(&self, token: &str) -> ApiClient {
        let client = self.client().await;
        client.store().set_token(token).await.unwrap();
        client
    }
}

async fn respond(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.recorded.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: body.to_vec(),
    });

    let answer = {
        let mut canned = state.canned.lock().unwrap();
        canned
            .get_mut(&(method, uri.path().to_string()))
            .and_then(|queue| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            })
    };

    let (status, body) =
        answer.unwrap_or_else(|| (StatusCode::NOT_FOUND, json!({"message": "Not Found"}).to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

pub fn user_json(id: u64, email: &str, verified: bool) -> Value {
    json!({
        "id": id,
        "name": "Ana",
        "email": email,
        "email_verified_at": if verified { json!("2026-01-10T09:00:00Z") } else { Value::Null },
        "role": "candidate",
    })
}

pub fn offer_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": "IT",
        "contract_type": "Full-time",
        "job_location": "Madrid",
        "closing_date": "2026-12-31",
    })
}
