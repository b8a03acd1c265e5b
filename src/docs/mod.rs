//! API documentation endpoints.
//!
//! # Data Flow
//! ```text
//! GET /docs          → page.rs (static Swagger UI shell)
//!                        ↳ browser fetches /swagger.json
//! GET /swagger.json  → openapi.rs document, built once at startup
//! ```

pub mod openapi;
pub mod page;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::http::server::AppState;

pub use page::docs_page;

/// `GET /swagger.json`
pub async fn swagger_json(State(state): State<AppState>) -> Json<Value> {
    Json(Value::clone(&state.openapi))
}
