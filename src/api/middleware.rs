use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use http::header;
use tracing::info;

/// URLs containing any of these are passed through without logging.
pub const EXCLUDED_ROUTES: [&str; 4] = ["/favicon.ico", "/_nuxt/", "/assets/", "/api/health"];

const SLOW_THRESHOLD: Duration = Duration::from_millis(500);
const VERY_SLOW_THRESHOLD: Duration = Duration::from_millis(1000);

pub fn is_excluded(uri: &str) -> bool {
    EXCLUDED_ROUTES.iter().any(|route| uri.contains(route))
}

pub fn performance_label(elapsed: Duration) -> &'static str {
    if elapsed > VERY_SLOW_THRESHOLD {
        "Very Slow"
    } else if elapsed > SLOW_THRESHOLD {
        "Slow"
    } else {
        "Good"
    }
}

fn client_ip(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .map(String::from)
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Logs the start and completion of every request with timing, status and caller.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let uri = req.uri().to_string();
    if is_excluded(&uri) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let ip = client_ip(&req);
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let start = Instant::now();
    info!("Request started: {} {} from {}", method, uri, ip);

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    info!(
        status = response.status().as_u16(),
        duration_ms = elapsed.as_millis() as u64,
        performance = performance_label(elapsed),
        user_agent = %user_agent,
        ip = %ip,
        "Request completed: {} {}",
        method,
        uri
    );
    response
}
