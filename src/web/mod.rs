//! Web module - HTML page and HTTP routing

mod handlers;
pub mod page;

pub use handlers::{build_router, serve, AppState};
