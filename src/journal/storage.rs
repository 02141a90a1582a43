use crate::errors::AppError;
use crate::journal::models::LogBook;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("LOG_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/log.json"))
}

/// Fail-soft: no file or a broken one both start the log empty. The broken
/// case is logged, nothing more.
pub async fn load_data(path: &Path) -> LogBook {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse log data file: {err}");
                LogBook::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LogBook::default(),
        Err(err) => {
            error!("failed to read log data file: {err}");
            LogBook::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &LogBook) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
