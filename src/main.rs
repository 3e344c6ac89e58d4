//! Book Catalog - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use book_catalog::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use book_catalog::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use book_catalog::infrastructure::driven_adapters::sqlite::{
    SqliteAuthorRepository, SqliteBookRepository,
};
use book_catalog::infrastructure::driving_adapters::web::{self, AppState};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    let covers = config.covers.source()?;

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!(url = %config.database.url, "Database connection pool created");

    // Run migrations
    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories and application state
    let book_repository = Arc::new(SqliteBookRepository::new(pool.clone()));
    let author_repository = Arc::new(SqliteAuthorRepository::new(pool));
    let app_state = AppState::new(book_repository, author_repository, covers);

    let app = web::router(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
