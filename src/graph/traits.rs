//! Core traits for graph database abstraction.
//!
//! This module defines the trait hierarchy that backends must implement:
//!
//! - [`CypherExecutor`] - Required for all graph backends
//! - [`Session`] - Session lifecycle (close)
//! - [`GraphClient`] - Connection pool and session creation

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, RowStream};

/// Executes Cypher queries against a graph database.
///
/// This is the core trait that all graph backends must implement.
/// It provides methods for executing queries that return results
/// and queries that don't (procedure calls, mutations).
#[async_trait]
pub trait CypherExecutor: Send + Sync {
    /// Executes a Cypher query and returns a stream of result rows.
    ///
    /// # Arguments
    ///
    /// * `cypher` - The Cypher query string
    /// * `params` - Parameters to bind to the query
    async fn execute_cypher(&self, cypher: &str, params: Params)
        -> Result<RowStream<'_>, AppError>;

    /// Executes a Cypher query, discarding any results.
    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError>;
}

/// A short-lived handle to the graph store.
///
/// A session pins one connection for its lifetime and must be closed
/// explicitly. Closing consumes the session.
#[async_trait]
pub trait Session: CypherExecutor {
    /// Releases the session.
    ///
    /// Work done in the session is kept if every query succeeded and
    /// discarded otherwise.
    async fn close(self) -> Result<(), AppError>;
}

/// A graph database client that hands out sessions.
///
/// Implementations typically wrap a connection pool. The client is shared
/// by every request for the lifetime of the process.
#[async_trait]
pub trait GraphClient: Send + Sync + 'static {
    /// The session type returned by this client.
    type Session<'a>: Session
    where
        Self: 'a;

    /// Opens a new session.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let session = client.session().await?;
    /// let result = session.run_cypher("RETURN 1", Params::new()).await;
    /// session.close().await?;
    /// result?;
    /// ```
    async fn session(&self) -> Result<Self::Session<'_>, AppError>;
}
