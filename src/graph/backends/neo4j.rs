//! Neo4j backend implementation over the Bolt protocol.
//!
//! A session is one explicit transaction on one pooled connection. It is
//! committed on close when all of its queries succeeded and rolled back
//! otherwise.
//!
//! # Example
//!
//! ```ignore
//! use ontograph::graph::backends::neo4j::Neo4jClient;
//! use ontograph::graph::{Graph, QueryExt};
//!
//! let client = Neo4jClient::connect(&config.neo4j).await?;
//! let graph = Graph::new(client);
//!
//! graph.query("CALL n10s.graphconfig.init()").run().await?;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use neo4rs::{query, BoltList, BoltMap, BoltNull, BoltString, BoltType, ConfigBuilder, Txn};
use serde_json::Value as JsonValue;
use tokio::sync::Mutex;

use crate::config::Neo4jConfig;
use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::{CypherExecutor, GraphClient, Session};

/// Neo4j graph client.
///
/// Wraps the `neo4rs` connection pool. This type is cheap to clone.
#[derive(Clone)]
pub struct Neo4jClient {
    graph: neo4rs::Graph,
}

impl Neo4jClient {
    /// Creates a new client with connection pooling.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, AppError> {
        let mut builder = ConfigBuilder::default()
            .uri(config.url.as_str())
            .user(config.user.as_str())
            .password(config.pass.as_str());

        if let Some(database) = &config.database {
            builder = builder.db(database.as_str());
        }
        if let Some(max_connections) = config.max_connections {
            builder = builder.max_connections(max_connections);
        }

        let graph = neo4rs::Graph::connect(builder.build()?).await?;
        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphClient for Neo4jClient {
    type Session<'a> = Neo4jSession;

    async fn session(&self) -> Result<Self::Session<'_>, AppError> {
        let txn = self.graph.start_txn().await?;
        tracing::debug!("Neo4j session opened");
        Ok(Neo4jSession {
            txn: Mutex::new(Some(txn)),
            failed: AtomicBool::new(false),
        })
    }
}

/// A Neo4j session backed by one explicit transaction.
///
/// Must be closed with [`Session::close`]; dropping an open session logs a
/// warning and leaves cleanup to the driver.
pub struct Neo4jSession {
    txn: Mutex<Option<Txn>>,
    failed: AtomicBool,
}

impl Neo4jSession {
    async fn collect(&self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        let mut guard = self.txn.lock().await;
        let txn = guard
            .as_mut()
            .ok_or_else(|| AppError::Internal("session already closed".to_string()))?;

        let result = fetch_rows(txn, cypher, params).await;
        if result.is_err() {
            self.failed.store(true, Ordering::Relaxed);
        }
        result
    }
}

#[async_trait]
impl CypherExecutor for Neo4jSession {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        let rows = self.collect(cypher, params).await?;
        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        self.collect(cypher, params).await.map(|_| ())
    }
}

#[async_trait]
impl Session for Neo4jSession {
    async fn close(self) -> Result<(), AppError> {
        let Some(txn) = self.txn.lock().await.take() else {
            return Ok(());
        };

        if self.failed.load(Ordering::Relaxed) {
            // The server may already have terminated a failed transaction
            if let Err(e) = txn.rollback().await {
                tracing::debug!("Rollback of failed session returned: {}", e);
            }
            tracing::debug!("Neo4j session closed (rolled back)");
            return Ok(());
        }

        txn.commit().await?;
        tracing::debug!("Neo4j session closed");
        Ok(())
    }
}

impl Drop for Neo4jSession {
    fn drop(&mut self) {
        if self.txn.get_mut().is_some() {
            tracing::warn!("Neo4jSession dropped without close - transaction left to the driver");
        }
    }
}

/// Runs a query inside the transaction and drains every row.
async fn fetch_rows(txn: &mut Txn, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
    let bolt_query = params
        .into_iter()
        .fold(query(cypher), |q, (name, value)| {
            q.param(&name, json_to_bolt(value))
        });

    let query_error = |e: neo4rs::Error| AppError::Query {
        message: e.to_string(),
        query: cypher.to_string(),
    };

    let mut stream = txn.execute(bolt_query).await.map_err(query_error)?;

    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await.map_err(query_error)? {
        rows.push(parse_neo4j_row(&row)?);
    }
    Ok(rows)
}

/// Converts a driver row into a JSON row keyed by column name.
fn parse_neo4j_row(row: &neo4rs::Row) -> Result<Row, AppError> {
    row.to::<HashMap<String, JsonValue>>()
        .map(Row::new)
        .map_err(|e| AppError::Internal(format!("Failed to decode row: {}", e)))
}

/// Converts a JSON parameter value to its Bolt representation.
///
/// Integral numbers stay integers; every other number becomes a float.
fn json_to_bolt(value: JsonValue) -> BoltType {
    match value {
        JsonValue::Null => BoltType::Null(BoltNull),
        JsonValue::Bool(b) => BoltType::from(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => BoltType::from(s),
        JsonValue::Array(items) => {
            let mut list = BoltList::with_capacity(items.len());
            for item in items {
                list.push(json_to_bolt(item));
            }
            BoltType::List(list)
        }
        JsonValue::Object(map) => {
            let mut bolt = BoltMap::with_capacity(map.len());
            for (key, item) in map {
                bolt.put(BoltString::from(key), json_to_bolt(item));
            }
            BoltType::Map(bolt)
        }
    }
}
