#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::post,
};
use commute_client::client_params::{CommuteClientParams, parse_api_url};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};

pub const ENDPOINT: &str = "/recommend-team-travel";

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct StubResponse {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            delay: Duration::ZERO,
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = Box<dyn Fn(&Value) -> StubResponse + Send + Sync>;

struct StubState {
    received: Mutex<Vec<ReceivedRequest>>,
    respond: Responder,
}

/// Local stand-in for the recommendation server.
pub struct StubServer {
    address: SocketAddr,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> StubResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let state = Arc::new(StubState {
            received: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        });

        let app = Router::new()
            .route(ENDPOINT, post(handle))
            .with_state(Arc::clone(&state));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address,
            state,
            handle,
        }
    }

    pub async fn always(status: StatusCode, body: &str) -> Self {
        let body = body.to_owned();
        Self::start(move |_| StubResponse::new(status, &body)).await
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.address, ENDPOINT)
    }

    pub fn params(&self) -> CommuteClientParams {
        CommuteClientParams::new(parse_api_url(&self.url()).unwrap())
            .with_from_addresses(vec![String::from("12 Rue Haute, Brussels")])
            .with_to_address("1 Place Flagey, Brussels")
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(State(state): State<Arc<StubState>>, headers: HeaderMap, body: Bytes) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state.received.lock().unwrap().push(ReceivedRequest {
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: body.clone(),
    });

    let response = (state.respond)(&body);
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    (response.status, response.body).into_response()
}

/// URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", address, ENDPOINT)
}
