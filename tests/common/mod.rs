//! In-memory graph client for driving the router without a database.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use ontograph::api;
use ontograph::config::{Config, Neo4jConfig};
use ontograph::context::Context;
use ontograph::error::AppError;
use ontograph::graph::{CypherExecutor, GraphClient, Params, Row, RowStream, Session};

type Handler = dyn Fn(&str, &Params) -> Result<Vec<Row>, AppError> + Send + Sync;

/// Session open/close counters shared with the test.
#[derive(Clone, Default)]
pub struct SessionCounts {
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl SessionCounts {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Answers every query with the result of `handler`.
pub struct MockClient {
    handler: Box<Handler>,
    counts: SessionCounts,
    open_error: Option<String>,
    close_error: Option<String>,
}

impl MockClient {
    pub fn new<F>(handler: F) -> (Self, SessionCounts)
    where
        F: Fn(&str, &Params) -> Result<Vec<Row>, AppError> + Send + Sync + 'static,
    {
        let counts = SessionCounts::default();
        let client = Self {
            handler: Box::new(handler),
            counts: counts.clone(),
            open_error: None,
            close_error: None,
        };
        (client, counts)
    }

    /// Every `session()` call fails with `message`.
    pub fn fail_open(mut self, message: &str) -> Self {
        self.open_error = Some(message.to_string());
        self
    }

    /// Every `close()` call fails with `message` after counting the close.
    pub fn fail_close(mut self, message: &str) -> Self {
        self.close_error = Some(message.to_string());
        self
    }
}

pub struct MockSession<'a> {
    client: &'a MockClient,
}

#[async_trait]
impl GraphClient for MockClient {
    type Session<'a> = MockSession<'a>;

    async fn session(&self) -> Result<Self::Session<'_>, AppError> {
        if let Some(message) = &self.open_error {
            return Err(AppError::Internal(message.clone()));
        }
        self.counts.opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockSession { client: self })
    }
}

#[async_trait]
impl CypherExecutor for MockSession<'_> {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        let rows = (self.client.handler)(cypher, &params)?;
        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        (self.client.handler)(cypher, &params).map(|_| ())
    }
}

#[async_trait]
impl Session for MockSession<'_> {
    async fn close(self) -> Result<(), AppError> {
        self.client.counts.closed.fetch_add(1, Ordering::SeqCst);
        match &self.client.close_error {
            Some(message) => Err(AppError::Internal(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        neo4j: Neo4jConfig {
            url: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            pass: String::new(),
            database: None,
            max_connections: None,
        },
    }
}

/// Builds the application router over a mock client.
pub fn app<F>(handler: F) -> (Router, SessionCounts)
where
    F: Fn(&str, &Params) -> Result<Vec<Row>, AppError> + Send + Sync + 'static,
{
    let (client, counts) = MockClient::new(handler);
    (app_with(client), counts)
}

/// Builds the application router over a preconfigured mock client.
pub fn app_with(client: MockClient) -> Router {
    api::router(Context::new(client, test_config()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .expect("request")
}

pub fn post_json(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .body(Body::empty())
        .expect("request")
}

/// Sends a request and decodes the JSON response body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json body");
    (status, json)
}
