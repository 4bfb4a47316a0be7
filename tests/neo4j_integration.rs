//! Integration tests for the Neo4j backend.
//!
//! These tests require a running Neo4j instance (n10s is only needed for the
//! ontology tests). Run with:
//! `NEO4J_URL=bolt://localhost:7687 NEO4J_USER=neo4j NEO4J_PASS=password cargo test --features integration --test neo4j_integration`

#![cfg(feature = "integration")]

use axum::extract::FromRef;
use ontograph::config::Config;
use ontograph::context::Context;
use ontograph::graph::backends::neo4j::Neo4jClient;
use ontograph::graph::{CypherExecutor, GraphClient, Params, QueryExt, Session};
use ontograph::repositories::{BuildingRepository, OntologyRepository};
use serial_test::serial;

async fn create_context() -> Context<Neo4jClient> {
    let config = Config::load().expect("NEO4J_URL and NEO4J_USER must be set");
    Context::from_config(config)
        .await
        .expect("Failed to connect to test database")
}

/// Clean up test data before/after tests
async fn cleanup(ctx: &Context<Neo4jClient>) {
    let _ = ctx
        .graph
        .run_cypher("MATCH (n:IntegrationTest) DETACH DELETE n", Params::new())
        .await;
}

async fn seed_building(ctx: &Context<Neo4jClient>, uri: &str, rooms: &[&str]) {
    ctx.graph
        .query("CREATE (:Building:IntegrationTest {uri: $uri, label: 'Test building'})")
        .param("uri", uri)
        .run()
        .await
        .expect("Failed to create building");

    for room in rooms {
        ctx.graph
            .query(
                "MATCH (b:Building:IntegrationTest {uri: $building})
                 CREATE (b)-[:hasPart]->(:Room:IntegrationTest {uri: $room})",
            )
            .param("building", uri)
            .param("room", *room)
            .run()
            .await
            .expect("Failed to create room");
    }
}

// All tests run serially since they share the IntegrationTest label
#[serial]
mod database_tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let ctx = create_context().await;
        ctx.graph.ping().await.expect("Ping failed");
    }

    #[tokio::test]
    async fn test_find_building() {
        let ctx = create_context().await;
        cleanup(&ctx).await;
        seed_building(&ctx, "urn:it:building:1", &[]).await;

        let repo = BuildingRepository::from_ref(&ctx);
        let building = repo
            .find_by_uri("urn:it:building:1")
            .await
            .expect("Query failed")
            .expect("Building not found");

        assert_eq!(building.uri(), Some("urn:it:building:1"));
        assert_eq!(building.0["label"], "Test building");

        let missing = repo.find_by_uri("urn:it:building:none").await.unwrap();
        assert!(missing.is_none());

        cleanup(&ctx).await;
    }

    #[tokio::test]
    async fn test_list_rooms() {
        let ctx = create_context().await;
        cleanup(&ctx).await;
        seed_building(&ctx, "urn:it:building:2", &["urn:it:room:b", "urn:it:room:a"]).await;
        seed_building(&ctx, "urn:it:building:3", &[]).await;

        let repo = BuildingRepository::from_ref(&ctx);
        let rooms = repo.list_rooms("urn:it:building:2").await.expect("Query failed");
        let uris: Vec<_> = rooms.iter().filter_map(|r| r.uri()).collect();
        assert_eq!(uris, vec!["urn:it:room:a", "urn:it:room:b"]);

        let none = repo.list_rooms("urn:it:building:3").await.unwrap();
        assert!(none.is_empty());

        cleanup(&ctx).await;
    }

    #[tokio::test]
    async fn test_failed_session_rolls_back() {
        let ctx = create_context().await;
        cleanup(&ctx).await;

        let session = ctx.graph.client().session().await.expect("Session failed");
        session
            .query("CREATE (:IntegrationTest {uri: 'urn:it:rollback'})")
            .run()
            .await
            .expect("Create failed");
        let result = session.query("RETURN 1 +").run().await;
        assert!(result.is_err());
        session.close().await.expect("Close failed");

        let rows = ctx
            .graph
            .query("MATCH (n:IntegrationTest {uri: 'urn:it:rollback'}) RETURN n.uri AS uri")
            .fetch_all()
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_query_error_is_reported() {
        let ctx = create_context().await;
        let result = ctx.graph.query("MATCH (n RETURN n").fetch_all().await;
        assert!(matches!(
            result,
            Err(ontograph::error::AppError::Query { .. })
        ));
    }

    #[tokio::test]
    async fn test_graph_init_is_idempotent_after_import() {
        let ctx = create_context().await;
        cleanup(&ctx).await;

        let ontology = OntologyRepository::from_ref(&ctx);
        ontology.init_graph_config().await.expect("First init failed");

        // n10s refuses to reconfigure a graph that holds resources
        ctx.graph
            .query("CREATE (:Resource:IntegrationTest {uri: 'urn:it:resource:1'})")
            .run()
            .await
            .expect("Failed to create resource");

        ontology.init_graph_config().await.expect("Repeat init failed");
        ontology.init_graph_config().await.expect("Third init failed");

        cleanup(&ctx).await;
    }
}
