//! Hippias API: HTTP surface for the reading-group platform.
//!
//! All persistence lives in a hosted Supabase backend; this crate parses
//! requests, issues filtered queries through the backend client, and shapes
//! the JSON responses.

pub mod backend;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;

pub use backend::{Backend, BackendError};
pub use error::ApiError;
pub use routes::{api_routes, common_routes};
pub use settings::Settings;
pub use state::AppState;
