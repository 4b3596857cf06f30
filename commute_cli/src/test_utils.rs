use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Router, extract::State, routing::post};
use commute_client::{
    client_params::{CommuteClientParams, parse_api_url},
    commute_client::CommuteClient,
};
use tokio::net::TcpListener;

/// Recommendation endpoint answering every POST with `body`.
pub struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    pub async fn start(body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!(
            "http://{}/recommend-team-travel",
            listener.local_addr().unwrap()
        );
        let hits = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route(
                "/recommend-team-travel",
                post(move |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    body
                }),
            )
            .with_state(Arc::clone(&hits));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, hits }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> CommuteClient {
        create_test_client(&self.url)
    }
}

pub fn create_test_client(url: &str) -> CommuteClient {
    CommuteClient::new(
        CommuteClientParams::new(parse_api_url(url).unwrap())
            .with_from_addresses(vec![String::from("Home")])
            .with_to_address("Office"),
    )
}
