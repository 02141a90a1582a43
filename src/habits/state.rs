use crate::habits::models::HabitData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct HabitState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<HabitData>>,
}

impl HabitState {
    pub fn new(data_path: PathBuf, data: HabitData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
