pub mod calendar;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use state::HabitState;

use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: HabitState) -> Router {
    Router::new()
        .route("/habits", get(handlers::page))
        .route("/habits/add", post(handlers::add_habit))
        .route("/habits/delete", post(handlers::delete_habit))
        .route("/habits/toggle", post(handlers::toggle))
        .route("/api/habits", get(handlers::api_roster).post(handlers::api_add))
        .route("/api/habits/delete", post(handlers::api_delete))
        .route("/api/habits/toggle", post(handlers::api_toggle))
        .route("/api/habits/day/:date", get(handlers::api_day))
        .route("/api/habits/month", get(handlers::api_month))
        .with_state(state)
}
