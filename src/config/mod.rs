use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute URL of the career assistant backend.
    pub chat_endpoint: String,
    /// Dashboard summary snapshot written by the prediction backend.
    pub data_path: PathBuf,
    pub window_size: (f32, f32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Flask dev server address the backend runs on
            chat_endpoint: "http://127.0.0.1:5000/chatbot".to_string(),
            data_path: PathBuf::from("dashboard.json"),
            window_size: (1100.0, 760.0),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: AppConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config and save it
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        tracing::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;

        Ok(config_dir.join("jobai-dashboard").join("config.json"))
    }

    /// True when the endpoint looks usable. An unusable endpoint disables
    /// the chat assistant for the whole app lifetime.
    pub fn has_chat_endpoint(&self) -> bool {
        let endpoint = self.chat_endpoint.trim();
        endpoint.starts_with("http://") || endpoint.starts_with("https://")
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size.0 <= 0.0 || self.window_size.1 <= 0.0 {
            return Err(anyhow::anyhow!("Window size must be positive"));
        }

        if !self.chat_endpoint.trim().is_empty() && !self.has_chat_endpoint() {
            return Err(anyhow::anyhow!(
                "Chat endpoint must be an http(s) URL: {}",
                self.chat_endpoint
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = AppConfig::default();
        assert!(config.has_chat_endpoint());
        assert_eq!(config.data_path, PathBuf::from("dashboard.json"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.window_size = (0.0, 760.0);
        assert!(config.validate().is_err());

        config.window_size = (1100.0, 760.0);
        config.chat_endpoint = "ftp://example.com/chat".to_string();
        assert!(config.validate().is_err());

        // Empty endpoint is valid config, it just disables the assistant
        config.chat_endpoint = String::new();
        assert!(config.validate().is_ok());
        assert!(!config.has_chat_endpoint());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.chat_endpoint, deserialized.chat_endpoint);
        assert_eq!(config.window_size, deserialized.window_size);
    }
}
