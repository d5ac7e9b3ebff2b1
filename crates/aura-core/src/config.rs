use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AuraError, Result};
use crate::types::{BrandTone, Product};

/// Top-level configuration for the Aura agent.
///
/// Loaded from `~/.aura/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

impl AuraConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AuraConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AuraError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Maximum accepted request body in bytes.
    pub max_body_bytes: usize,
    /// Requests allowed per second across all clients.
    pub rate_limit_per_sec: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3040,
            max_body_bytes: 256 * 1024,
            rate_limit_per_sec: 50,
        }
    }
}

/// Agent persona and boundary limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Display name on agent-authored messages.
    pub agent_name: String,
    /// Used when a request names no customer.
    pub default_customer_name: String,
    /// Longest customer message accepted, in characters.
    pub max_message_chars: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_name: "Aura Agent".to_string(),
            default_customer_name: "Customer".to_string(),
            max_message_chars: 2000,
        }
    }
}

/// Default business context, overridable per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub business_name: String,
    pub brand_tone: BrandTone,
    pub campaign_focus: Option<String>,
    pub catalog: Vec<Product>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            business_name: "Aura Lifestyle".to_string(),
            brand_tone: BrandTone::Friendly,
            campaign_focus: None,
            catalog: demo_catalog(),
        }
    }
}

/// Destinations used when building call-to-action links.
///
/// Product-specific links append `?product=<id>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub checkout_url: String,
    pub product_url: String,
    pub offers_url: String,
    pub catalog_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            checkout_url: "https://shop.aura.example/checkout".to_string(),
            product_url: "https://shop.aura.example/products".to_string(),
            offers_url: "https://shop.aura.example/offers".to_string(),
            catalog_url: "https://shop.aura.example/catalog".to_string(),
        }
    }
}

fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "jamdani-saree".to_string(),
            name: "Handwoven Jamdani Saree".to_string(),
            description: "Lightweight cotton Jamdani woven in Narayanganj.".to_string(),
            price: 4500.0,
            currency: "BDT".to_string(),
            benefits: vec![
                "Handwoven by local artisans".to_string(),
                "Free blouse piece".to_string(),
            ],
            tags: vec![
                "bestseller".to_string(),
                "featured".to_string(),
                "price".to_string(),
            ],
        },
        Product {
            id: "eid-combo".to_string(),
            name: "Eid Festive Combo".to_string(),
            description: "Panjabi and kurti pair for the festive season.".to_string(),
            price: 6200.0,
            currency: "BDT".to_string(),
            benefits: vec!["Save more when buying the pair".to_string()],
            tags: vec![
                "bundle".to_string(),
                "discount".to_string(),
                "offer".to_string(),
            ],
        },
        Product {
            id: "cotton-kurti".to_string(),
            name: "Everyday Cotton Kurti".to_string(),
            description: "Breathable kurti with express dispatch.".to_string(),
            price: 1450.0,
            currency: "BDT".to_string(),
            benefits: vec!["Ships within 24 hours inside Dhaka".to_string()],
            tags: vec!["delivery".to_string(), "express".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AuraConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.port, 3040);
        assert_eq!(config.agent.default_customer_name, "Customer");
        assert_eq!(config.agent.max_message_chars, 2000);
        assert_eq!(config.business.brand_tone, BrandTone::Friendly);
        assert_eq!(config.business.catalog.len(), 3);
        assert!(config.links.checkout_url.ends_with("/checkout"));
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[server]
port = 8080

[business]
business_name = "Dhaka Threads"
brand_tone = "professional"
campaign_focus = "Puja Sale"

[[business.catalog]]
id = "shirt"
name = "Linen Shirt"
price = 1800.0
currency = "BDT"
tags = ["discount"]
"#;
        let file = create_temp_config(content);
        let config = AuraConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.business.business_name, "Dhaka Threads");
        assert_eq!(config.business.brand_tone, BrandTone::Professional);
        assert_eq!(config.business.campaign_focus.as_deref(), Some("Puja Sale"));
        assert_eq!(config.business.catalog.len(), 1);
        assert!(config.business.catalog[0].benefits.is_empty());
        assert_eq!(config.agent.agent_name, "Aura Agent");
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is [not valid");
        let err = AuraConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AuraError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AuraConfig::load(Path::new("/nonexistent/aura/config.toml")).unwrap_err();
        assert!(matches!(err, AuraError::Io(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = AuraConfig::load_or_default(Path::new("/nonexistent/aura/config.toml"));
        assert_eq!(config.server.port, 3040);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AuraConfig::default();
        config.agent.agent_name = "Tara".to_string();
        config.links.offers_url = "https://example.com/deals".to_string();
        config.save(&path).unwrap();

        let reloaded = AuraConfig::load(&path).unwrap();
        assert_eq!(reloaded.agent.agent_name, "Tara");
        assert_eq!(reloaded.links.offers_url, "https://example.com/deals");
        assert_eq!(reloaded.business.catalog, config.business.catalog);
    }
}
