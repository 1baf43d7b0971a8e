use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamesConfig {
    /// JSON file holding the name table
    #[serde(default = "default_names_path")]
    pub path: String,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            path: default_names_path(),
        }
    }
}

fn default_names_path() -> String {
    "./names.json".to_string()
}
