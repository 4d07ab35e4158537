use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn to_yaml<TConfig: Serialize>(config: &TConfig) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml<TConfig: DeserializeOwned>(content: &str) -> Result<TConfig, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// YAML config file with a cached, validated copy of its contents.
/// A missing file reads as `TConfig::default()`.
pub struct ConfigManager<TConfig> {
    file_path: PathBuf,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + Serialize + DeserializeOwned + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            config: Mutex::new(None),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache is poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: TConfig = from_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = to_yaml(config)?;
        std::fs::write(&self.file_path, serialized)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache is poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}
