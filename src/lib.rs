pub mod errors;
pub mod habits;
pub mod journal;

use axum::{response::Redirect, routing::get, Router};

/// Merges the two applications into one router. They share the process and
/// nothing else: each keeps its own model, storage file and routes.
pub fn router(habit_state: habits::HabitState, log_state: journal::LogState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/habits") }))
        .merge(habits::router(habit_state))
        .merge(journal::router(log_state))
}
