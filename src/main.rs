use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use fwi_server::{config::Config, create_router, AppState, PredictionService};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fwi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("FWI inference server starting...");
    tracing::info!("Artifact directory: {}", config.model_dir.display());

    // Load artifacts; a failed load degrades the service instead of
    // aborting, so the process stays observable.
    let service = PredictionService::load(&config);
    if service.is_degraded() {
        tracing::warn!("serving in degraded mode: predictions will be refused");
    }

    let state = AppState {
        service: Arc::new(service),
    };

    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
