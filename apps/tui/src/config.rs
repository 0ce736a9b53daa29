use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DATA_VAR: &str = "RADAR_DATA";
pub const EXPORT_DIR_VAR: &str = "RADAR_EXPORT_DIR";
pub const LOG_FILE_VAR: &str = "RADAR_LOG_FILE";

/// Settings resolved from the environment (and `.env`) at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset file replacing the built-in tables.
    pub data_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            export_dir: PathBuf::from("./exports"),
            log_file: None,
        }
    }
}

/// Initializes the application configuration
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let defaults = Self::default();
        Self {
            data_path: non_empty(DATA_VAR).map(PathBuf::from),
            export_dir: non_empty(EXPORT_DIR_VAR).map_or(defaults.export_dir, PathBuf::from),
            log_file: non_empty(LOG_FILE_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_overrides_and_ignores_blank_values() {
        let vars = HashMap::from([
            (DATA_VAR, "custom.json"),
            (EXPORT_DIR_VAR, "  "),
            (LOG_FILE_VAR, "/tmp/radar.log"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.data_path, Some(PathBuf::from("custom.json")));
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/radar.log")));
    }
}
