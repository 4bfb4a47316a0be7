//! HTTP API.
//!
//! The route table is declared statically here:
//!
//! | Method | Path |
//! |--------|------|
//! | GET | `/` |
//! | GET | `/api/v1/building/{uri}` |
//! | GET | `/api/v1/building/{uri}/rooms` |
//! | POST | `/api/v1/ontology/graphInit` |
//! | POST | `/api/v1/ontology/uploadOntology` |
//! | POST | `/api/v1/ontology/uploadRdfFile` |

mod building;
mod envelope;
mod ontology;

use axum::extract::OriginalUri;
use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value as JsonValue};
use tower_http::trace::TraceLayer;

use crate::context::Context;
use crate::error::AppError;
use crate::graph::GraphClient;

pub use envelope::Envelope;

/// Builds the full application router.
pub fn router<C: GraphClient>(ctx: Context<C>) -> Router {
    let api = Router::new()
        .merge(building::routes())
        .merge(ontology::routes())
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .route("/", get(hello))
        .nest("/api", api)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn hello() -> Json<JsonValue> {
    Json(json!({ "hello": "world" }))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
