use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multiplier_api::config::ServerConfig;
use multiplier_api::router::build_app_router;
use multiplier_api::state::AppState;
use multiplier_core::image::ImageClipboard;
use multiplier_genai::GenAiClient;
use multiplier_publisher::WebhookDelivery;
use multiplier_store::{FileBackend, SettingsStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "multiplier_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Settings store ---
    let backend =
        FileBackend::new(&config.settings_dir).expect("Failed to open settings directory");
    let store = Arc::new(SettingsStore::new(Box::new(backend)));
    let settings = store.load_all();
    tracing::info!(
        personas = settings.personas.len(),
        webhook_configured = !settings.automation.webhook_url.is_empty(),
        "Settings loaded"
    );

    // --- Collaborator clients ---
    let genai = Arc::new(GenAiClient::new(
        config.genai_api_url.clone(),
        config.genai_api_key.clone(),
    ));
    let delivery = Arc::new(WebhookDelivery::new());

    // --- App state ---
    let state = AppState {
        content: Arc::new(RwLock::new(Vec::new())),
        image_in_flight: Arc::new(RwLock::new(None)),
        clipboard: Arc::new(RwLock::new(ImageClipboard::default())),
        settings: Arc::new(RwLock::new(settings)),
        store,
        genai,
        delivery,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
