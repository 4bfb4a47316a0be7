//! Import command handler.

use axum::extract::FromRef;
use clap::{Args, ValueEnum};
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::models::RdfFormat;
use crate::repositories::OntologyRepository;

/// What kind of document is imported.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ImportKind {
    /// OWL/RDFS ontology (classes and properties only)
    Ontology,
    /// Full RDF document
    Rdf,
}

/// Import arguments.
#[derive(Args)]
pub struct ImportCommand {
    /// Kind of document to import
    #[arg(value_enum)]
    pub kind: ImportKind,

    /// Link to the raw RDF document
    pub url: String,

    /// RDF serialization format
    #[arg(long, default_value_t = RdfFormat::Turtle)]
    pub format: RdfFormat,
}

impl ImportCommand {
    /// Run the import against the configured graph.
    pub async fn run(&self) -> Result<()> {
        let config = Config::load()?;
        let ctx = Context::from_config(config)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to connect: {}", e))?;

        let ontology = OntologyRepository::from_ref(&ctx);
        let result = match self.kind {
            ImportKind::Ontology => ontology.import_ontology(&self.url, self.format).await,
            ImportKind::Rdf => ontology.import_rdf(&self.url, self.format).await,
        };
        drop(ontology);
        ctx.shutdown();

        let summary = result.map_err(|e| color_eyre::eyre::eyre!("Import failed: {}", e))?;
        println!(
            "Imported {} triples ({} parsed) from {}",
            summary.triples_loaded, summary.triples_parsed, self.url
        );
        Ok(())
    }
}
