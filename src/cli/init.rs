//! Init command handler.

use axum::extract::FromRef;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::repositories::OntologyRepository;

use super::App;

impl App {
    /// Run the init command to set up the n10s graph configuration.
    pub async fn run_init(&self) -> Result<()> {
        let config = Config::load()?;
        let ctx = Context::from_config(config)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to connect: {}", e))?;

        tracing::info!("Initializing n10s graph config...");
        OntologyRepository::from_ref(&ctx)
            .init_graph_config()
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Graph init failed: {}", e))?;

        ctx.shutdown();
        Ok(())
    }
}
