use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use library_api::{AppState, config::Config, database::PgStore, router::create_router};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    if config.allow_plaintext_passwords {
        tracing::warn!(
            "ALLOW_PLAINTEXT_PASSWORDS is enabled: admin passwords stored in plaintext will be accepted"
        );
    }
    tracing::warn!("Login tokens are issued but not verified by any route");

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout())
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'library_api';").await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    let store = Arc::new(PgStore::new(pool.clone()));
    let state = AppState::new(store.clone(), store, config.clone());
    let app = create_router(state);

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid SERVER_HOST, falling back to 0.0.0.0");
            IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server running on {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Failed to start server");

    pool.close().await;
    tracing::info!("Connection pool closed, shutting down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
