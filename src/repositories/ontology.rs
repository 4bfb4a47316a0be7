//! Ontology repository for n10s graph configuration and RDF imports.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::context::{AppGraph, Context};
use crate::cypher;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::{GraphClient, QueryExt};
use crate::models::{ImportSummary, RdfFormat};

const HANDLE_VOCAB_URIS: &str = "IGNORE";

const GRAPH_INIT: &str = r#"CALL n10s.graphconfig.init({handleVocabUris: "IGNORE"})"#;

const GRAPH_CONFIG_SHOW: &str = "CALL n10s.graphconfig.show() YIELD param, value
     RETURN param, value";

// n10s refuses to change the config once resources have been imported.
const GRAPH_NON_EMPTY: &str = "The graph is non-empty";

const IMPORT_ONTOLOGY: &str = "CALL n10s.onto.import.fetch($url, $format)
     YIELD terminationStatus, triplesLoaded, triplesParsed, extraInfo
     RETURN terminationStatus, triplesLoaded, triplesParsed, extraInfo";

const IMPORT_RDF: &str = "CALL n10s.rdf.import.fetch($url, $format)
     YIELD terminationStatus, triplesLoaded, triplesParsed, extraInfo
     RETURN terminationStatus, triplesLoaded, triplesParsed, extraInfo";

/// Repository for n10s procedures.
pub struct OntologyRepository<C: GraphClient = Neo4jClient> {
    graph: AppGraph<C>,
}

impl<C: GraphClient> Clone for OntologyRepository<C> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
        }
    }
}

impl<C: GraphClient> FromRef<Context<C>> for OntologyRepository<C> {
    fn from_ref(ctx: &Context<C>) -> Self {
        Self {
            graph: Arc::clone(&ctx.graph),
        }
    }
}

impl<C: GraphClient> OntologyRepository<C> {
    /// Initialize the n10s graph configuration, ignoring vocabulary URIs.
    ///
    /// Succeeds without changes when the graph already holds imported
    /// resources and the stored config ignores vocabulary URIs.
    pub async fn init_graph_config(&self) -> Result<(), AppError> {
        match cypher!(self.graph, GRAPH_INIT).run().await {
            Ok(()) => {
                tracing::info!("n10s graph config initialized");
                Ok(())
            }
            Err(AppError::Query { message, query }) if message.contains(GRAPH_NON_EMPTY) => {
                let current = self.vocab_uri_handling().await?;
                if current.as_deref() == Some(HANDLE_VOCAB_URIS) {
                    tracing::info!("n10s graph config already initialized");
                    Ok(())
                } else {
                    tracing::warn!(
                        handle_vocab_uris = current.as_deref().unwrap_or("unset"),
                        "n10s graph config differs and the graph is non-empty"
                    );
                    Err(AppError::Query { message, query })
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Reads `handleVocabUris` from the stored n10s graph config.
    async fn vocab_uri_handling(&self) -> Result<Option<String>, AppError> {
        let rows = cypher!(self.graph, GRAPH_CONFIG_SHOW).fetch_all().await?;
        for row in rows {
            let param: String = row.get("param")?;
            if param == "handleVocabUris" {
                return row.get_opt("value");
            }
        }
        Ok(None)
    }

    /// Import an OWL/RDFS ontology (classes and properties only).
    pub async fn import_ontology(
        &self,
        url: &str,
        format: RdfFormat,
    ) -> Result<ImportSummary, AppError> {
        self.import(IMPORT_ONTOLOGY, url, format).await
    }

    /// Import a full RDF document.
    pub async fn import_rdf(&self, url: &str, format: RdfFormat) -> Result<ImportSummary, AppError> {
        self.import(IMPORT_RDF, url, format).await
    }

    async fn import(
        &self,
        procedure: &str,
        url: &str,
        format: RdfFormat,
    ) -> Result<ImportSummary, AppError> {
        let row = cypher!(self.graph, procedure, url = url, format = format.as_str())
            .fetch_one()
            .await?
            .ok_or_else(|| AppError::Internal("import procedure returned no result".to_string()))?;

        let summary: ImportSummary = row.to()?;
        if !summary.is_ok() {
            return Err(AppError::Import(summary.failure_message()));
        }

        tracing::info!(
            url,
            format = %format,
            triples_loaded = summary.triples_loaded,
            "RDF import complete"
        );
        Ok(summary)
    }
}
