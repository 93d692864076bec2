use crate::error::{AppError, AppResult};
use crate::proxy::config::ProviderConfig;
use crate::proxy::upstream::UpstreamClient;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Axum application state, immutable for the life of the process
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ProviderConfig>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(provider: ProviderConfig, upstream: UpstreamClient) -> Self {
        Self {
            provider: Arc::new(provider),
            upstream: Arc::new(upstream),
        }
    }
}

/// Build routes
pub fn build_router(state: AppState) -> Router {
    use crate::proxy::handlers;

    Router::new()
        .route("/health", get(handlers::health::handle_health))
        .route("/api/zr-express", post(handlers::zr_express::handle_forward))
        .route("/api/orders", post(handlers::orders::handle_submit))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            crate::proxy::middleware::logging_middleware,
        ))
        .layer(crate::proxy::middleware::cors_layer())
        .with_state(state)
}

/// Axum server instance
pub struct AxumServer {
    shutdown_tx: Option<oneshot::Sender<()>>,
    local_addr: SocketAddr,
}

impl AxumServer {
    /// Start Axum server
    pub async fn start(
        host: &str,
        port: u16,
        state: AppState,
    ) -> AppResult<(Self, tokio::task::JoinHandle<()>)> {
        let app = build_router(state);

        // Bind address
        let addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Server(format!("Failed to bind address {}: {}", addr, e)))?;
        let local_addr = listener.local_addr()?;

        tracing::info!("ZR Express proxy started at http://{}", local_addr);

        // Create shutdown channel
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        // Start server in new task
        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                tokio::select! {
                    res = listener.accept() => {
                        match res {
                            Ok((stream, _)) => {
                                let io = TokioIo::new(stream);
                                let service = TowerToHyperService::new(app.clone());

                                tokio::task::spawn(async move {
                                    if let Err(err) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        debug!("Connection handling finished or errored: {:?}", err);
                                    }
                                });
                            }
                            Err(e) => {
                                error!("Failed to accept connection: {:?}", e);
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::info!("ZR Express proxy stopped listening");
                        break;
                    }
                }
            }
        });

        Ok((
            Self {
                shutdown_tx: Some(shutdown_tx),
                local_addr,
            },
            handle,
        ))
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop server
    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::credentials::ProviderCredentials;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(base_url: &str) -> AppState {
        let provider = ProviderConfig {
            base_url: base_url.to_string(),
            token: "relay-token".to_string(),
            key: "relay-key".to_string(),
            ..ProviderConfig::default()
        };
        let upstream = UpstreamClient::with_client(
            reqwest::Client::new(),
            &provider.base_url,
            &ProviderCredentials::new("relay-token", "relay-key"),
        )
        .unwrap();
        AppState::new(provider, upstream)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_ok_without_provider() {
        // Provider address is unreachable, health must not care
        let app = build_router(test_state("http://127.0.0.1:1"));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
        assert!(body["message"].is_string());
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_relay_forwards_body_and_status() {
        let mut server = mockito::Server::new_async().await;
        let payload = r#"{"Colis":[{"Tracking":"R-1","IDWilaya":"31"}]}"#;
        let mock = server
            .mock("POST", "/add_colis")
            .match_header("token", "relay-token")
            .match_header("key", "relay-key")
            .match_body(payload)
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"COUNT":1,"Colis":[{"Tracking":"R-1"}]}"#)
            .create_async()
            .await;

        let app = build_router(test_state(&server.url()));
        let response = app.oneshot(post_json("/api/zr-express", payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["COUNT"], 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_relay_passes_provider_rejection_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/add_colis")
            .with_status(400)
            .with_body(r#"{"message":"Token invalide"}"#)
            .create_async()
            .await;

        let app = build_router(test_state(&server.url()));
        let response = app.oneshot(post_json("/api/zr-express", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Token invalide");
    }

    #[tokio::test]
    async fn test_relay_unreachable_provider_returns_500() {
        let app = build_router(test_state("http://127.0.0.1:1"));
        let response = app
            .oneshot(post_json("/api/zr-express", r#"{"Colis":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_relay_non_json_provider_returns_500() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/add_colis")
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let app = build_router(test_state(&server.url()));
        let response = app.oneshot(post_json("/api/zr-express", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_orders_endpoint_maps_submission() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/add_colis")
            .match_body(Matcher::PartialJson(json!({
                "Colis": [{"Client": "Karim", "TypeLivraison": "1", "IDWilaya": "1", "Total": "0"}]
            })))
            .with_status(200)
            .with_body(r#"{"COUNT":1}"#)
            .create_async()
            .await;

        let app = build_router(test_state(&server.url()));
        let response = app
            .oneshot(post_json("/api/orders", r#"{"customer_name":"Karim"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_orders_endpoint_reports_failure() {
        let app = build_router(test_state("http://127.0.0.1:1"));
        let response = app
            .oneshot(post_json("/api/orders", "not json at all"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_object());
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = build_router(test_state("http://127.0.0.1:1"));
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/zr-express")
                    .header("origin", "http://localhost:19006")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_server_start_and_stop() {
        let (server, handle) = AxumServer::start("127.0.0.1", 0, test_state("http://127.0.0.1:1"))
            .await
            .unwrap();
        let url = format!("http://{}/health", server.local_addr());

        let body: Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(body["status"], "OK");

        server.stop();
        handle.await.unwrap();
    }
}
