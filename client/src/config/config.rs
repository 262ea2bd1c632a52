use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};

use super::GameConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Manager for `path`, or for the file next to the executable.
pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be empty if provided".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_level: LogLevel::Info,
            log_prefix: Some("tictactoe".to_string()),
        }
    }
}
