//! HTTP boundary for the forecast service.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod schema;

pub use error::{ApiError, GENERIC_ERROR};
pub use handlers::AppState;
pub use routes::{app, create_routes};
