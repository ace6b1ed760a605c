use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;
use usergraph::config::CONFIG;
use usergraph::startup::{build_app, build_state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Loaded configuration: {:?}", *CONFIG);

    let app = build_app(build_state(&CONFIG));

    // Start server
    let addr = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{} (public base {})", addr, CONFIG.api_base_url);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
