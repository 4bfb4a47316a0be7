//! Backend implementations for different graph databases.
//!
//! Each backend implements the core traits from [`crate::graph::traits`]:
//!
//! - [`CypherExecutor`](crate::graph::CypherExecutor) - Required, for sessions
//! - [`Session`](crate::graph::Session) - Required
//! - [`GraphClient`](crate::graph::GraphClient) - Required
//!
//! # Available Backends
//!
//! | Backend | Module | Status |
//! |---------|--------|--------|
//! | Neo4j (Bolt) | [`neo4j`] | Available |
//!
//! # Implementing a Backend
//!
//! 1. Create a client struct (e.g., `Neo4jClient`)
//! 2. Create a session struct (e.g., `Neo4jSession`)
//! 3. Implement `CypherExecutor` and `Session` for the session struct
//! 4. Implement `GraphClient` for the client struct

pub mod neo4j;
