//! Data access layer for graph operations.
//!
//! Each repository method runs exactly one query, in its own session.
//! Repositories are extracted from [`Context`](crate::context::Context)
//! through `axum::extract::FromRef`.

mod building;
mod ontology;

pub use building::BuildingRepository;
pub use ontology::OntologyRepository;
