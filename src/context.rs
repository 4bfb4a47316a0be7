//! Application context shared by every request.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::{Graph, GraphClient};

/// Shared graph handle.
pub type AppGraph<C = Neo4jClient> = Arc<Graph<C>>;

/// Root application context.
///
/// Constructed once at startup and handed to the router as state.
/// Repositories are extracted from it via `axum::extract::FromRef`.
pub struct Context<C: GraphClient = Neo4jClient> {
    /// Graph database client.
    pub graph: AppGraph<C>,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl<C: GraphClient> Clone for Context<C> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: GraphClient> Context<C> {
    /// Creates a new context with the given dependencies.
    pub fn new(client: C, config: Config) -> Self {
        Self {
            graph: Arc::new(Graph::new(client)),
            config: Arc::new(config),
        }
    }

    /// Releases the graph client.
    ///
    /// Call after the server has stopped; the pool is closed once the last
    /// handle is dropped.
    pub fn shutdown(self) {
        let handles = Arc::strong_count(&self.graph);
        if handles > 1 {
            tracing::warn!(handles, "Graph client still referenced at shutdown");
        }
        drop(self.graph);
        tracing::info!("Graph client released");
    }
}

impl Context<Neo4jClient> {
    /// Connects to Neo4j and verifies the connection.
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        tracing::info!("Connecting to Neo4j at {}", config.neo4j.url);
        let client = Neo4jClient::connect(&config.neo4j).await?;
        let ctx = Self::new(client, config);

        ctx.graph.ping().await?;
        tracing::info!("Connected to Neo4j");
        Ok(ctx)
    }
}
