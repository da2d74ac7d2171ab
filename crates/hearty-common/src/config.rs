use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::Error;

pub const ENV_MOCK_MODE: &str = "HEARTY_MOCK_MODE";
pub const ENV_API_BASE_URL: &str = "HEARTY_API_BASE_URL";
pub const ENV_AI_PROVIDER: &str = "HEARTY_AI_PROVIDER";

/// Backend variants able to produce a health report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Grok,
    Qwen,
    Doubao,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::OpenAi,
        ProviderKind::Grok,
        ProviderKind::Qwen,
        ProviderKind::Doubao,
        ProviderKind::Gemini,
    ];

    /// Name used in configuration files and on the wire.
    pub fn config_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openAI",
            ProviderKind::Grok => "grok",
            ProviderKind::Qwen => "qwen",
            ProviderKind::Doubao => "doubao",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "OpenAI"),
            ProviderKind::Grok => write!(f, "Grok"),
            ProviderKind::Qwen => write!(f, "Qwen"),
            ProviderKind::Doubao => write!(f, "Doubao"),
            ProviderKind::Gemini => write!(f, "Gemini"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.config_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownProvider(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_report_path")]
    pub report_path: String,

    /// Bearer token for the report backend, if it requires one
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_report_path() -> String {
    "/ai/health-report".to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            report_path: default_report_path(),
            api_token: None,
        }
    }
}

/// Application-wide settings, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Return the built-in report without touching any provider
    #[serde(default = "default_mock_mode")]
    pub mock_mode: bool,

    /// Base address of the report backend; empty means no backend is reachable
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Provider name, resolved into a [`ProviderKind`] at dispatch time
    #[serde(default = "default_ai_provider")]
    pub ai_provider: String,

    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

fn default_mock_mode() -> bool {
    true
}

fn default_api_base_url() -> String {
    String::new()
}

fn default_ai_provider() -> String {
    ProviderKind::OpenAi.config_name().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mock_mode: default_mock_mode(),
            api_base_url: default_api_base_url(),
            ai_provider: default_ai_provider(),
            general: GeneralConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("hearty")
            .join("config.toml")
    }

    /// Load configuration from the default path and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_path(&Self::default_config_path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific path, creating a default file if it doesn't exist
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        debug!("Loading configuration from {:?}", config_path);

        if !config_path.exists() {
            info!(
                "Configuration file not found at {:?}, creating default configuration",
                config_path
            );
            let default_config = Self::default();
            default_config.save_to_path(config_path)?;
            return Ok(default_config);
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: AppConfig = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        debug!("Saving configuration to {:?}", config_path);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let config_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Saved configuration to {:?}", config_path);
        Ok(())
    }

    /// Apply `HEARTY_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MOCK_MODE) {
            self.mock_mode = parse_flag(&value).ok_or_else(|| {
                Error::InvalidConfig(format!("{} must be a boolean, got {:?}", ENV_MOCK_MODE, value))
            })?;
            debug!("mock_mode overridden to {}", self.mock_mode);
        }

        if let Some(value) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = value;
            debug!("api_base_url overridden to {}", self.api_base_url);
        }

        if let Some(value) = lookup(ENV_AI_PROVIDER) {
            self.ai_provider = value;
            debug!("ai_provider overridden to {}", self.ai_provider);
        }

        Ok(())
    }

    /// Resolve the configured provider name.
    pub fn provider_kind(&self) -> crate::Result<ProviderKind> {
        self.ai_provider.parse()
    }

    /// Whether a backend address is configured at all
    pub fn has_backend(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }

    /// Validate the configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.network.timeout_secs == 0 {
            return Err(Error::InvalidConfig("network.timeout_secs must be positive".into()).into());
        }

        if !self.network.report_path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "network.report_path must start with '/', got {:?}",
                self.network.report_path
            ))
            .into());
        }

        if self.provider_kind().is_err() {
            warn!("Unknown AI provider {:?} - live report requests will fail", self.ai_provider);
        }

        if !self.mock_mode && !self.has_backend() {
            warn!("Live mode without api_base_url - every provider will be unreachable");
        }

        if self.api_base_url.starts_with("http://") {
            warn!("api_base_url uses plain HTTP - health data will be sent unencrypted");
        }

        debug!("Configuration validation passed");
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
