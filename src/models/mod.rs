//! Domain models for the building ontology graph.

mod building;
mod ontology;

pub use building::{Building, Properties, Room};
pub use ontology::{ImportSummary, RdfFormat};
