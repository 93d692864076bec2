// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};

/// Log method, URI and final status of every request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    tracing::info!("Request: {} {}", method, uri);

    let response = next.run(request).await;
    tracing::info!("Response: {} {} -> {}", method, uri, response.status());
    response
}
