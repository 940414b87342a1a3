use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use collections_api::config::ServerConfig;
use collections_api::router::build_app_router;
use collections_api::state::AppState;
use collections_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "collections_api=debug,collections_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // Required settings are checked before any connection is attempted.
    let config = ServerConfig::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "Invalid configuration");
        std::process::exit(1);
    });
    let host: IpAddr = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(host, config.port);

    let pool = prepare_database(&config.database_url).await;

    let state = AppState::new(pool, config.clone());
    let app = build_app_router(state, &config).expect("Invalid router configuration");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, base_url = %config.public_base_url, "Collections API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shut down cleanly");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify and migrate. Any failure here aborts startup.
async fn prepare_database(database_url: &str) -> DbPool {
    let pool = collections_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");
    collections_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    collections_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready");
    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        let mut signal =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler");
        signal.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "Starting graceful shutdown");
}
