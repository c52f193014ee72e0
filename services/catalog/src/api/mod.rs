//! API 层

mod routes;

pub use routes::{AppState, api_routes};
