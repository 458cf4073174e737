//! # Planboard API Server
//!
//! Serves the users / projects / tasks JSON API and, when present, the
//! single-page frontend from the static directory.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=sqlite://project_management.db cargo run -p planboard-api
//! ```

use anyhow::Context;
use planboard_api::{
    app::{build_router, AppState},
    config::Config,
};
use planboard_shared::db::{
    migrations::{get_migration_status, run_migrations},
    pool::{close_pool, create_pool, get_pool_stats},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "planboard_api=debug,planboard_shared=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Planboard API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(config.pool_config())
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    let migrations = get_migration_status(&pool)
        .await
        .context("Failed to read migration status")?;
    let stats = get_pool_stats(&pool);
    tracing::info!(
        applied_migrations = migrations.applied_migrations,
        latest_version = ?migrations.latest_version,
        up_to_date = migrations.is_up_to_date,
        pool_connections = stats.total_connections,
        pool_idle = stats.idle_connections,
        "Database ready"
    );

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(pool.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, draining database pool");
    close_pool(pool).await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, finishing in-flight requests...");
}
