//! In-process catalog endpoint for client and CLI tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub auth: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    ids: Vec<Value>,
    items: Vec<Value>,
    fail_status: Option<StatusCode>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Builder for a mock catalog
#[derive(Default)]
pub struct MockCatalog {
    state: MockState,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full identifier list; `get_ids` answers with the requested slice
    pub fn with_ids(mut self, ids: Vec<Value>) -> Self {
        self.state.ids = ids;
        self
    }

    /// Item pool; `get_items` answers with every pool item whose id was requested
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.state.items = items;
        self
    }

    /// Answer every request with `status` and a plain-text body
    pub fn failing_with(mut self, status: StatusCode) -> Self {
        self.state.fail_status = Some(status);
        self
    }

    pub async fn start(self) -> RunningCatalog {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let requests = self.state.requests.clone();

        let app = Router::new()
            .route("/", post(handle))
            .with_state(self.state);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        RunningCatalog {
            addr,
            requests,
            handle,
        }
    }
}

/// A started mock catalog; the server stops when this is dropped
pub struct RunningCatalog {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl RunningCatalog {
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for RunningCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        auth: header("x-auth"),
        content_type: header("content-type"),
        body: body.clone(),
    });

    if let Some(status) = state.fail_status {
        return (status, "catalog unavailable").into_response();
    }

    let params = &body["params"];
    let result = match body["action"].as_str() {
        Some("get_ids") => {
            let offset = params["offset"].as_u64().unwrap_or(0) as usize;
            let limit = params["limit"].as_u64().unwrap_or(0) as usize;
            let slice: Vec<Value> = state.ids.iter().skip(offset).take(limit).cloned().collect();
            json!(slice)
        }
        Some("get_items") => {
            let wanted = params["ids"].as_array().cloned().unwrap_or_default();
            let items: Vec<Value> = state
                .items
                .iter()
                .filter(|item| wanted.contains(&item["id"]))
                .cloned()
                .collect();
            json!(items)
        }
        _ => return (StatusCode::BAD_REQUEST, "unknown action").into_response(),
    };

    Json(json!({ "result": result })).into_response()
}

/// An item as the catalog serializes it
pub fn item(id: impl Into<Value>, name: &str, price: f64, brand: Option<&str>) -> Value {
    json!({
        "id": id.into(),
        "product": name,
        "price": price,
        "brand": brand,
    })
}
