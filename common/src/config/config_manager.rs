use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config lazily, validates it, and caches the result.
///
/// A missing config yields `TConfig::default()` without caching it, so a later
/// `set_config` is what first persists anything.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Option<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: None,
        }
    }

    pub fn get_config(&mut self) -> Result<TConfig, String> {
        if let Some(config) = self.config.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        self.config = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&mut self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        self.config = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        limit: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { limit: 3 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.limit > 10 {
                return Err("limit must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_empty_provider_returns_default() {
        let mut manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(InMemoryConfigProvider::new(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_saved_config() {
        let mut manager =
            ConfigManager::new(InMemoryConfigProvider::new(), YamlConfigSerializer::new());
        let config = SampleConfig { limit: 7 };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let mut manager =
            ConfigManager::new(InMemoryConfigProvider::new(), YamlConfigSerializer::new());
        assert!(manager.set_config(&SampleConfig { limit: 11 }).is_err());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_invalid_stored_config_cant_be_read() {
        let provider = InMemoryConfigProvider::with_content("limit: 42\n");
        let mut manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_malformed_stored_config_cant_be_read() {
        let provider = InMemoryConfigProvider::with_content("limit: [not a number\n");
        let mut manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }
}
