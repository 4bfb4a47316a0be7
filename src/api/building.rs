//! Building routes.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::api::Envelope;
use crate::context::Context;
use crate::error::AppError;
use crate::graph::GraphClient;
use crate::models::{Building, Room};
use crate::repositories::BuildingRepository;

pub fn routes<C: GraphClient>() -> Router<Context<C>> {
    Router::new()
        .route("/v1/building/{uri}", get(get_building::<C>))
        .route("/v1/building/{uri}/rooms", get(get_rooms::<C>))
}

/// Get a building by URI; `data` is `null` when no building matches.
async fn get_building<C: GraphClient>(
    State(buildings): State<BuildingRepository<C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Envelope<Option<Building>>, AppError> {
    let uri = building_uri(path)?;
    let building = buildings.find_by_uri(&uri).await?;
    tracing::debug!(uri, found = building.is_some(), "Building lookup");
    Ok(Envelope::success(building))
}

/// List the rooms of a building.
async fn get_rooms<C: GraphClient>(
    State(buildings): State<BuildingRepository<C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Envelope<Vec<Room>>, AppError> {
    let uri = building_uri(path)?;
    let rooms = buildings.list_rooms(&uri).await?;
    tracing::debug!(uri, count = rooms.len(), "Room lookup");
    Ok(Envelope::success(rooms))
}

fn building_uri(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(uri) = path.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    Ok(uri)
}
