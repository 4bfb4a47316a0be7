//! ontograph - HTTP API over a building ontology graph
//!
//! Proxies building, room and ontology-import requests to a Neo4j graph
//! store with the n10s plugin. Every request runs one query in one session.

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod models;
pub mod repositories;
