use std::sync::Arc;

use bookshelf_store::{BookStore, InMemoryBookStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Bookshelf inventory server.
pub struct BookshelfServer {
    config: ServerConfig,
    store: Arc<dyn BookStore>,
}

impl BookshelfServer {
    /// Create a server backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_sample_data {
            InMemoryBookStore::seeded()
        } else {
            InMemoryBookStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server backed by an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn BookStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn BookStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.store))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            books = self.store.list().len(),
            "Bookshelf server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))?;
        tracing::info!("Bookshelf server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
