use crate::errors::AppError;
use crate::journal::models::{LogBook, LogEntry, LogResponse, SaveNoteRequest};
use crate::journal::state::LogState;
use crate::journal::storage::persist_data;
use crate::journal::ui::render_page;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use serde::Deserialize;

pub async fn page(State(state): State<LogState>) -> Html<String> {
    let today = today_key();
    let data = state.data.lock().await;
    Html(render_page(&today, data.note(&today).unwrap_or(""), &data))
}

#[derive(Debug, Deserialize)]
pub struct SaveNoteForm {
    pub note: String,
}

pub async fn save(
    State(state): State<LogState>,
    Form(form): Form<SaveNoteForm>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    data.save_note(&today_key(), &form.note);
    persist_data(&state.data_path, &data).await?;
    Ok(Redirect::to("/log"))
}

pub async fn clear_today(State(state): State<LogState>) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    data.clear_note(&today_key());
    persist_data(&state.data_path, &data).await?;
    Ok(Redirect::to("/log"))
}

pub async fn clear_all(State(state): State<LogState>) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    data.clear_all();
    persist_data(&state.data_path, &data).await?;
    Ok(Redirect::to("/log"))
}

pub async fn api_get(State(state): State<LogState>) -> Json<LogResponse> {
    let data = state.data.lock().await;
    Json(to_response(&data))
}

pub async fn api_save(
    State(state): State<LogState>,
    Json(payload): Json<SaveNoteRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.save_note(&today_key(), &payload.text);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(to_response(&data)))
}

fn to_response(data: &LogBook) -> LogResponse {
    let today = today_key();
    LogResponse {
        today: LogEntry {
            text: data.note(&today).unwrap_or("").to_string(),
            date: today,
        },
        entries: data
            .entries_desc()
            .map(|(date, text)| LogEntry {
                date: date.to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}

fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
