use derivative::Derivative;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".phoneexport.json";

/// Workbook layout. Every field can be overridden from `.phoneexport.json`;
/// fields left out keep their defaults.
#[derive(Debug, Clone, PartialEq, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    #[derivative(Default(value = "String::from(\"Phone Numbers\")"))]
    pub sheet_name: String,
    #[derivative(Default(value = "String::from(\"PhoneNumber\")"))]
    pub header: String,
    #[derivative(Default(value = "String::from(\"UniquePhoneNumbers.xlsx\")"))]
    pub file_name: String,
    #[derivative(Default(value = "24.0"))]
    pub column_width: f64,
}

impl ExportConfig {
    pub fn from_file(folder_path: &Path) -> Option<Self> {
        let config_path = folder_path.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {}: {}", config_path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<ExportConfig>(&content) {
            Ok(config) => {
                info!("Loaded export settings from {}", config_path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring malformed {}: {}", config_path.display(), e);
                None
            }
        }
    }

    pub fn load_or_default(folder_path: &Path) -> Self {
        Self::from_file(folder_path).unwrap_or_default()
    }
}
