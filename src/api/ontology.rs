//! Ontology routes backed by n10s.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::Envelope;
use crate::context::Context;
use crate::error::AppError;
use crate::graph::GraphClient;
use crate::models::RdfFormat;
use crate::repositories::OntologyRepository;

pub fn routes<C: GraphClient>() -> Router<Context<C>> {
    Router::new()
        .route("/v1/ontology/graphInit", post(graph_init::<C>))
        .route("/v1/ontology/uploadOntology", post(upload_ontology::<C>))
        .route("/v1/ontology/uploadRdfFile", post(upload_rdf_file::<C>))
}

/// Body of the upload routes.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// Link to a raw RDF document.
    pub url: Option<String>,
    #[serde(default)]
    pub format: RdfFormat,
}

impl UploadRequest {
    fn from_body(
        body: Result<Json<UploadRequest>, JsonRejection>,
    ) -> Result<(String, RdfFormat), AppError> {
        let Json(request) =
            body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        match request.url {
            Some(url) if !url.trim().is_empty() => Ok((url, request.format)),
            _ => Err(AppError::Validation("url is required".to_string())),
        }
    }
}

/// Initialize the n10s graph configuration.
async fn graph_init<C: GraphClient>(
    State(ontology): State<OntologyRepository<C>>,
) -> Result<Envelope<&'static str>, AppError> {
    ontology.init_graph_config().await?;
    Ok(Envelope::success("Graph inited"))
}

/// Import an ontology from a URL.
async fn upload_ontology<C: GraphClient>(
    State(ontology): State<OntologyRepository<C>>,
    body: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Envelope<&'static str>, AppError> {
    let (url, format) = UploadRequest::from_body(body)?;
    ontology.import_ontology(&url, format).await?;
    Ok(Envelope::success("Uploaded Ontology successfully"))
}

/// Import an RDF document from a URL.
async fn upload_rdf_file<C: GraphClient>(
    State(ontology): State<OntologyRepository<C>>,
    body: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Envelope<&'static str>, AppError> {
    let (url, format) = UploadRequest::from_body(body)?;
    ontology.import_rdf(&url, format).await?;
    Ok(Envelope::success("Uploaded RDF file successfully"))
}
