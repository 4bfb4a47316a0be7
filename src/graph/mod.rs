//! Graph abstraction layer for backend-agnostic database access.
//!
//! # Architecture
//!
//! The abstraction is built on a small hierarchy of traits:
//!
//! - [`CypherExecutor`] - Execute Cypher queries (required for all graph backends)
//! - [`Session`] - A short-lived handle that must be closed
//! - [`GraphClient`] - Connection management and session creation
//!
//! # Usage
//!
//! ```ignore
//! use ontograph::graph::{Graph, QueryExt};
//!
//! let graph = Graph::new(client);
//!
//! // Every query runs in its own session, closed on success and failure
//! let rows = graph.query("MATCH (b:Building {uri: $uri}) RETURN properties(b) AS building")
//!     .param("uri", uri)
//!     .fetch_all()
//!     .await?;
//! ```

mod macros;
mod query;
mod row;
mod traits;

pub mod backends;

// Re-export core types
pub use query::{Query, QueryExt};
pub use row::{Params, Row, RowStream};
pub use traits::{CypherExecutor, GraphClient, Session};

// Re-export macro (defined at crate root via #[macro_export])
#[doc(inline)]
pub use crate::cypher;

// --- Graph wrapper struct ---

use futures::TryStreamExt;

use crate::error::AppError;

/// High-level wrapper providing session-per-query execution.
///
/// `Graph` wraps any [`GraphClient`]. Queries issued through it open a
/// session, drain the result, and close the session before returning, so
/// every open is paired with a close even when the query fails.
pub struct Graph<C: GraphClient> {
    client: C,
}

impl<C: GraphClient> Graph<C> {
    /// Creates a new graph wrapper around the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Checks that the store answers a trivial query.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.query("RETURN 1 AS ok").run().await
    }
}

#[async_trait::async_trait]
impl<C: GraphClient> CypherExecutor for Graph<C> {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        let session = self.client.session().await?;
        let result: Result<Vec<Row>, AppError> = async {
            session
                .execute_cypher(cypher, params)
                .await?
                .try_collect()
                .await
        }
        .await;
        let closed = session.close().await;

        let rows = result?;
        closed?;
        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        let session = self.client.session().await?;
        let result = session.run_cypher(cypher, params).await;
        let closed = session.close().await;

        result?;
        closed
    }
}
