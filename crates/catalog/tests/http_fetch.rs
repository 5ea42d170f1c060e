use std::net::SocketAddr;
use std::sync::mpsc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::json;
use storefront_catalog::{CatalogSource, FetchError, HttpCatalogClient};

struct TestServer {
    base_url: String,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    fn spawn() -> Self {
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // The client under test is blocking, so the server gets its own runtime
        // on a separate thread.
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("failed to bind ephemeral port");
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, routes())
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .unwrap();
            });
        });

        let addr = addr_rx.recv().expect("server did not report its address");
        Self {
            base_url: format!("http://{}", addr),
            shutdown: Some(shutdown_tx),
        }
    }

    fn client(&self, path: &str) -> HttpCatalogClient {
        HttpCatalogClient::new(format!("{}{}", self.base_url, path))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn routes() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async {
                Json(json!({
                    "products": [
                        {"id": 1, "title": "Apple Watch", "price": 399.99, "category": "wearables"},
                        {"id": 2, "title": "iPhone", "price": 999.0, "category": "smartphones"}
                    ],
                    "total": 2
                }))
            }),
        )
        .route("/empty", get(|| async { Json(json!({ "total": 0 })) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
        .route("/garbage", get(|| async { "definitely not json" }))
        .route(
            "/malformed",
            get(|| async { Json(json!({ "products": [{ "id": 1, "title": "No price" }] })) }),
        )
}

#[test]
fn fetches_and_parses_products() {
    let server = TestServer::spawn();

    let products = server.client("/products").fetch().unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title(), "Apple Watch");
    assert_eq!(products[1].category(), "smartphones");
}

#[test]
fn envelope_without_products_is_empty_success() {
    let server = TestServer::spawn();
    assert!(server.client("/empty").fetch().unwrap().is_empty());
}

#[test]
fn server_error_is_reported_and_degrades_to_empty() {
    let server = TestServer::spawn();
    let client = server.client("/broken");

    assert!(matches!(client.fetch(), Err(FetchError::Status(500))));
    assert!(client.fetch_or_empty().is_empty());
}

#[test]
fn client_error_is_reported() {
    let server = TestServer::spawn();
    assert!(matches!(
        server.client("/missing").fetch(),
        Err(FetchError::Status(404))
    ));
}

#[test]
fn non_json_body_is_a_parse_failure() {
    let server = TestServer::spawn();
    let client = server.client("/garbage");

    assert!(matches!(client.fetch(), Err(FetchError::Parse(_))));
    assert!(client.fetch_or_empty().is_empty());
}

#[test]
fn malformed_entry_fails_the_fetch() {
    let server = TestServer::spawn();
    assert!(matches!(
        server.client("/malformed").fetch(),
        Err(FetchError::Parse(_))
    ));
}

#[test]
fn unreachable_endpoint_is_a_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = HttpCatalogClient::new(format!("http://127.0.0.1:{}/products", port));

    assert!(matches!(client.fetch(), Err(FetchError::Network(_))));
    assert!(client.fetch_or_empty().is_empty());
}
