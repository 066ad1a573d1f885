//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

/// One request observed by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path_and_query: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Look up a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Start a mock backend that records every request and answers with a fixed
/// status and JSON body. Returns the bound address and the request log.
pub async fn start_recording_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<RecordedRequest>>>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        recorded: recorded.clone(),
    };

    let app = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, recorded)
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(&'static str, &'static str); 1], &'static str) {
    state.recorded.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path_and_query: uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), ToString::to_string),
        headers: headers
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body: body.to_vec(),
    });

    (state.status, [("content-type", "application/json")], state.body)
}
