use crate::errors::AppError;
use crate::habits::calendar::{date_key, month_grid, parse_date_key, MonthGrid, MonthRef};
use crate::habits::models::{
    AddHabitRequest, ChecklistItem, DayResponse, DaySummaryResponse, DeleteHabitRequest,
    DeleteHabitResponse, Habit, ToggleRequest,
};
use crate::habits::state::HabitState;
use crate::habits::storage::persist_data;
use crate::habits::ui::render_page;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use serde::Deserialize;

/// View state lives in the query string, not on the server: the viewed
/// month/year and the selected date travel with every link and form.
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<String>,
}

pub async fn page(State(state): State<HabitState>, Query(query): Query<ViewQuery>) -> Html<String> {
    let today = Local::now().date_naive();
    let selected = query
        .selected
        .as_deref()
        .and_then(parse_date_key)
        .unwrap_or(today);
    let month = match (query.year, query.month) {
        (Some(year), Some(month0)) if month0 < 12 => MonthRef::new(year, month0),
        _ => MonthRef::containing(selected),
    };

    let mut data = state.data.lock().await;
    let selected_key = date_key(selected);
    // Viewing a day materializes its record, as the checklist edits it in
    // place. The empty record reaches disk with the next save.
    data.day_record(&selected_key);
    let grid = month_grid(&data, month, Some(selected), today);
    Html(render_page(&data, &grid, selected, &selected_key))
}

#[derive(Debug, Deserialize)]
pub struct AddHabitForm {
    pub name: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<String>,
}

pub async fn add_habit(
    State(state): State<HabitState>,
    Form(form): Form<AddHabitForm>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    if data.add_habit(&form.name).is_some() {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(back_to_page(form.year, form.month, form.selected.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct DeleteHabitForm {
    pub id: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<String>,
}

pub async fn delete_habit(
    State(state): State<HabitState>,
    Form(form): Form<DeleteHabitForm>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    if data.remove_habit(&form.id) {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(back_to_page(form.year, form.month, form.selected.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub id: String,
    pub date: String,
    pub completed: bool,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<String>,
}

pub async fn toggle(
    State(state): State<HabitState>,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect, AppError> {
    if parse_date_key(&form.date).is_some() {
        let mut data = state.data.lock().await;
        if data.set_completed(&form.date, &form.id, form.completed) {
            persist_data(&state.data_path, &data).await?;
        }
    }
    Ok(back_to_page(form.year, form.month, form.selected.as_deref()))
}

pub async fn api_roster(State(state): State<HabitState>) -> Json<Vec<Habit>> {
    let data = state.data.lock().await;
    Json(data.habits.clone())
}

pub async fn api_add(
    State(state): State<HabitState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let habit = match data.add_habit(&payload.name) {
        Some(habit) => habit.clone(),
        None => return Err(AppError::bad_request("habit name must not be empty")),
    };
    persist_data(&state.data_path, &data).await?;
    Ok(Json(habit))
}

pub async fn api_delete(
    State(state): State<HabitState>,
    Json(payload): Json<DeleteHabitRequest>,
) -> Result<Json<DeleteHabitResponse>, AppError> {
    let mut data = state.data.lock().await;
    let removed = data.remove_habit(&payload.id);
    if removed {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Json(DeleteHabitResponse { removed }))
}

pub async fn api_toggle(
    State(state): State<HabitState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DaySummaryResponse>, AppError> {
    if parse_date_key(&payload.date).is_none() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }

    let mut data = state.data.lock().await;
    if !data.set_completed(&payload.date, &payload.id, payload.completed) {
        return Err(AppError::bad_request("unknown habit id"));
    }
    persist_data(&state.data_path, &data).await?;

    let (completed_count, total_habits) = data.completion_summary(&payload.date);
    Ok(Json(DaySummaryResponse {
        date: payload.date,
        completed_count,
        total_habits,
    }))
}

/// Read-only day view: unlike the HTML page, this never materializes a
/// record for a merely inspected day.
pub async fn api_day(
    State(state): State<HabitState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    if parse_date_key(&date).is_none() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }

    let data = state.data.lock().await;
    let (completed_count, total_habits) = data.completion_summary(&date);
    let items = data
        .habits
        .iter()
        .map(|habit| ChecklistItem {
            id: habit.id.clone(),
            name: habit.name.clone(),
            completed: data.is_completed(&date, &habit.id),
        })
        .collect();

    Ok(Json(DayResponse {
        date,
        completed_count,
        total_habits,
        items,
    }))
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<String>,
}

/// Grid as JSON. `selected` is optional; without it no cell is marked
/// selected (today is flagged either way).
pub async fn api_month(
    State(state): State<HabitState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    if query.month.is_some_and(|month0| month0 > 11) {
        return Err(AppError::bad_request("month must be 0-11"));
    }
    let selected = match query.selected.as_deref() {
        Some(key) => Some(parse_date_key(key).ok_or_else(|| {
            AppError::bad_request("selected must be YYYY-MM-DD")
        })?),
        None => None,
    };

    let today = Local::now().date_naive();
    let month = match (query.year, query.month) {
        (Some(year), Some(month0)) => MonthRef::new(year, month0),
        _ => MonthRef::containing(today),
    };

    let data = state.data.lock().await;
    Ok(Json(month_grid(&data, month, selected, today)))
}

fn back_to_page(year: Option<i32>, month: Option<u32>, selected: Option<&str>) -> Redirect {
    let mut params = Vec::new();
    if let (Some(year), Some(month)) = (year, month) {
        params.push(format!("year={year}&month={month}"));
    }
    // Only echo the selected date back when it really is a date key.
    if let Some(selected) = selected.filter(|key| parse_date_key(key).is_some()) {
        params.push(format!("selected={selected}"));
    }
    if params.is_empty() {
        Redirect::to("/habits")
    } else {
        Redirect::to(&format!("/habits?{}", params.join("&")))
    }
}
