//! Receipt Points API Server
//!
//! Thin HTTP surface over [`receipt_points::Processor`].
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Submit a receipt; responds `{"id": "..."}`
//! - GET /receipts/:id/points - Responds `{"points": n}`
//!
//! Invalid submissions get `400` and lookups of unknown ids get `404`, each
//! with a fixed plain-text body.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Cli, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::{create_router, PointsResponse, ProcessResponse};
pub use server::{bind, build_app, run_server, ServerError};
pub use state::AppState;
