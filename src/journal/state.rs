use crate::journal::models::LogBook;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct LogState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<LogBook>>,
}

impl LogState {
    pub fn new(data_path: PathBuf, data: LogBook) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
