use anyhow::Context;
use product_service::app::{self, product::model::Product, product::service::ProductService};
use product_service::infrastructure::{
    config::{load_config, StoreBackend},
    database::DatabaseManager,
    logger::Logger,
    store::{InMemoryStore, PgDocumentStore, Repository},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, info_span, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    config.validate()?;

    Logger::init(&config.logging)?;
    match &source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let repository: Arc<dyn Repository<Product>> = match config.database.backend {
        StoreBackend::Postgres => {
            let database = DatabaseManager::new(&config.database)
                .await
                .context("failed to connect to document store")?;
            let store = PgDocumentStore::<Product>::new(database.get_pool().clone());
            store.ensure_collection().await?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory document store, data is lost on restart");
            Arc::new(InMemoryStore::<Product>::new())
        }
    };

    let product_service = ProductService::new(repository, info_span!("product_service"));
    let router = app::build_router(
        product_service,
        Duration::from_secs(config.http.timeout_seconds),
    );

    let listener = TcpListener::bind((config.http.bind_address.as_str(), config.http.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.http.bind_address, config.http.port
            )
        })?;

    info!("Product service listening on {}", listener.local_addr()?);
    info!("   GET    /api/v1/products - list products");
    info!("   POST   /api/v1/products - create product");
    info!("   GET    /health          - health check");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl+c: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
