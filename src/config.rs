//! Runtime configuration: the URL list and the publish endpoint.
//!
//! Configuration lives in a small YAML file with two recognized options,
//! `urls` and `publish_endpoint`. Both carry compiled-in defaults so the
//! binary also runs without any file; the defaults mirror the article set
//! and backend this tool was first pointed at.

use serde::Deserialize;
use std::error::Error;
use tracing::info;

/// Default storage API endpoint.
pub const DEFAULT_PUBLISH_ENDPOINT: &str = "http://localhost:4000/api/v1/articles/articles";

/// Application configuration as read from YAML.
///
/// ```yaml
/// urls:
///   - https://www.tagesschau.de/ausland/europa/palaestina-staat-100.html
/// publish_endpoint: http://localhost:4000/api/v1/articles/articles
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Article URLs to process, in order.
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,
    /// Storage API endpoint records are POSTed to.
    #[serde(default = "default_publish_endpoint")]
    pub publish_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            publish_endpoint: default_publish_endpoint(),
        }
    }
}

fn default_publish_endpoint() -> String {
    DEFAULT_PUBLISH_ENDPOINT.to_string()
}

fn default_urls() -> Vec<String> {
    [
        "https://daserste.ndr.de/panorama/archiv/2010/Deutsches-Investment-Raubbau-im-Palaestinensergebiet-,panoramazement101.html",
        "https://www.tagesschau.de/ausland/europa/palaestina-staat-100.html",
        "https://www.tagesschau.de/ausland/asien/israel-gaza-evakuierung-100.html",
        "https://www.tagesschau.de/wirtschaft/weltwirtschaft/china-kritik-zoelle-e-autos-100.html",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Load configuration from a YAML file.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&raw)?;
    info!(path, url_count = config.urls.len(), "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.urls.len(), 4);
        assert_eq!(config.publish_endpoint, DEFAULT_PUBLISH_ENDPOINT);
        assert!(config.urls[1].contains("tagesschau.de"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
urls:
  - https://example.org/eins
  - https://example.org/zwei
publish_endpoint: http://backend:4000/api/v1/articles/articles
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.urls,
            vec!["https://example.org/eins", "https://example.org/zwei"]
        );
        assert_eq!(
            config.publish_endpoint,
            "http://backend:4000/api/v1/articles/articles"
        );
    }

    #[test]
    fn test_missing_endpoint_uses_default() {
        let yaml = "urls:\n  - https://example.org/eins\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.urls.len(), 1);
        assert_eq!(config.publish_endpoint, DEFAULT_PUBLISH_ENDPOINT);
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/definitely/not/here.yaml").is_err());
    }
}
