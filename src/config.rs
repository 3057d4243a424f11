use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub activities_file: Option<PathBuf>,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Mergington High School".to_string(),
            activities_file: None,
        }
    }
}
