use serde::Serialize;
use serde::de::DeserializeOwned;

/// Text format a settings file is stored in.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub const fn new() -> Self {
        Self
    }
}

impl<TConfig: Serialize + DeserializeOwned> ConfigSerializer<TConfig> for YamlConfigSerializer {
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Cannot write settings as YAML: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Cannot read settings YAML: {}", e))
    }
}
