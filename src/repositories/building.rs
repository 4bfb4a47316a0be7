//! Building repository for reading building and room nodes.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::context::{AppGraph, Context};
use crate::cypher;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::{GraphClient, QueryExt};
use crate::models::{Building, Room};

const FIND_BUILDING: &str = "MATCH (b:Building {uri: $uri})
     RETURN properties(b) AS building
     LIMIT 1";

// hasPart is matched in either direction, as the imported data is not consistent about it
const LIST_ROOMS: &str = "MATCH (b:Building {uri: $uri})-[:hasPart]-(r:Room)
     WITH DISTINCT r
     RETURN properties(r) AS room
     ORDER BY r.uri";

/// Repository for Building and Room lookups.
pub struct BuildingRepository<C: GraphClient = Neo4jClient> {
    graph: AppGraph<C>,
}

impl<C: GraphClient> Clone for BuildingRepository<C> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
        }
    }
}

impl<C: GraphClient> FromRef<Context<C>> for BuildingRepository<C> {
    fn from_ref(ctx: &Context<C>) -> Self {
        Self {
            graph: Arc::clone(&ctx.graph),
        }
    }
}

impl<C: GraphClient> BuildingRepository<C> {
    /// Find a building by URI.
    ///
    /// A missing building is not an error.
    pub async fn find_by_uri(&self, uri: &str) -> Result<Option<Building>, AppError> {
        let row = cypher!(self.graph, FIND_BUILDING, uri = uri)
            .fetch_one()
            .await?;

        match row {
            Some(row) => row.get_opt("building"),
            None => Ok(None),
        }
    }

    /// List the rooms that are part of a building.
    ///
    /// Returns an empty list for an unknown building.
    pub async fn list_rooms(&self, uri: &str) -> Result<Vec<Room>, AppError> {
        let rows = cypher!(self.graph, LIST_ROOMS, uri = uri)
            .fetch_all()
            .await?;

        rows.iter().map(|row| row.get("room")).collect()
    }
}
