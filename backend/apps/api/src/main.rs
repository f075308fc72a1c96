//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use api::{ServerConfig, StoreBackend, build_app};
use auth::{Account, AccountStore};
use docstore::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use sqlx::postgres::PgPoolOptions;
use todo::{Todo, TodoStore};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,todo=info,docstore=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            serve(
                &config,
                PgDocumentStore::<Account>::new(pool.clone()),
                PgDocumentStore::<Todo>::new(pool),
            )
            .await
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on exit");
            serve(
                &config,
                MemoryDocumentStore::<Account>::new(),
                MemoryDocumentStore::<Todo>::new(),
            )
            .await
        }
    }
}

/// Serve until Ctrl-C, then release the stores
async fn serve<A, T>(config: &ServerConfig, account_docs: A, todo_docs: T) -> anyhow::Result<()>
where
    A: DocumentStore<Account> + Clone,
    T: DocumentStore<Todo> + Clone,
{
    let app = build_app(
        AccountStore::new(account_docs.clone()),
        TodoStore::new(todo_docs.clone()),
        config.auth.clone(),
        config.frontend_origins.clone(),
    )?;

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    account_docs.close().await;
    todo_docs.close().await;

    Ok(())
}
