use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::OpponentKind;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_PLAYER_NAME_LEN: usize = 64;

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub opponent: OpponentKind,
    pub seed: Option<u64>,
    pub player_name: String,
    pub log_prefix: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(format!(
                "player_name must be at most {} characters",
                MAX_PLAYER_NAME_LEN
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("log_prefix must not be empty if provided".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentKind::Random,
            seed: None,
            player_name: "Player".to_string(),
            log_prefix: None,
        }
    }
}
