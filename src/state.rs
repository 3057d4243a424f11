use crate::activities::ActivityRegistry;
use crate::config::AppConfig;

use std::sync::Arc;
use std::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub registry: Arc<Mutex<ActivityRegistry>>,
}
