//! CLI module for ontograph.
//!
//! Subcommands:
//! - `serve`: Run the HTTP API (default when no subcommand is given)
//! - `init`: Initialize the n10s graph configuration
//! - `import`: Import an ontology or RDF document from a URL

mod import;
mod init;
mod serve;

use clap::{Parser, Subcommand};

pub use import::ImportCommand;

/// ontograph - Building ontology graph API
#[derive(Parser)]
#[command(name = "ontograph")]
#[command(about = "HTTP API over a Neo4j building ontology graph")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Initialize the n10s graph configuration
    Init,

    /// Import an ontology or RDF document into the graph
    Import(ImportCommand),
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            None => self.run_serve(None, None).await,
            Some(Command::Serve { ref host, port }) => {
                self.run_serve(host.as_deref(), port).await
            }
            Some(Command::Init) => self.run_init().await,
            Some(Command::Import(ref cmd)) => cmd.run().await,
        }
    }
}
