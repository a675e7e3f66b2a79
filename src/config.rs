use serde::Deserialize;
use std::fs;

/// The development endpoint; deployments override it via `config.json`.
pub const DEFAULT_API_URL: &str = "http://localhost:9001/avaliar";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_dev_endpoint() {
        assert_eq!(AppConfig::default().api_url, DEFAULT_API_URL);
    }

    #[test]
    fn config_parses_from_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_url":"http://192.168.1.140:9001/avaliar"}"#).unwrap();
        assert_eq!(config.api_url, "http://192.168.1.140:9001/avaliar");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("does-not-exist.json").is_err());
    }
}
