use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://dummyjson.com/recipes/search";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub search_endpoint: String,
    pub load_on_startup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            load_on_startup: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}
