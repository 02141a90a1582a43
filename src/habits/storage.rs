use crate::errors::AppError;
use crate::habits::models::HabitData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("HABITS_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/habits.json"))
}

/// Fail-soft load: a missing file means first run, an unreadable or
/// unparseable one is logged and treated the same. Either way the tracker
/// starts from an empty model.
pub async fn load_data(path: &Path) -> HabitData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse habit data file: {err}");
                HabitData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HabitData::default(),
        Err(err) => {
            error!("failed to read habit data file: {err}");
            HabitData::default()
        }
    }
}

/// Rewrites the whole blob. Last writer wins; the in-process mutex is the
/// only guard, a second process on the same file is unsupported.
pub async fn persist_data(path: &Path, data: &HabitData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = env::temp_dir();
        path.push(format!("habits_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty_model() {
        let path = scratch_path("missing");
        let data = load_data(&path).await;
        assert!(data.habits.is_empty());
        assert!(data.days.is_empty());
    }

    #[tokio::test]
    async fn corrupted_file_loads_empty_model() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.habits.is_empty());
        assert!(data.days.is_empty());
        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let path = scratch_path("roundtrip");
        let mut data = HabitData::default();
        let id = data.add_habit("Water the plants").expect("added").id.clone();
        data.set_completed("2024-05-01", &id, true);

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits.len(), 1);
        assert_eq!(loaded.habits[0].id, id);
        assert_eq!(loaded.habits[0].name, "Water the plants");
        assert!(loaded.is_completed("2024-05-01", &id));
        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn saving_twice_writes_identical_bytes() {
        let path = scratch_path("idempotent");
        let mut data = HabitData::default();
        data.add_habit("Journal");

        persist_data(&path, &data).await.unwrap();
        let first = fs::read(&path).await.unwrap();
        persist_data(&path, &data).await.unwrap();
        let second = fs::read(&path).await.unwrap();
        assert_eq!(first, second);
        fs::remove_file(&path).await.unwrap();
    }
}
