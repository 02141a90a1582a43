pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use state::LogState;

use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: LogState) -> Router {
    Router::new()
        .route("/log", get(handlers::page))
        .route("/log/save", post(handlers::save))
        .route("/log/clear-today", post(handlers::clear_today))
        .route("/log/clear-all", post(handlers::clear_all))
        .route("/api/log", get(handlers::api_get).post(handlers::api_save))
        .with_state(state)
}
