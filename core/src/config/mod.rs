use crate::agent::AgentProfile;
use crate::queries::WeatherClient;
use crate::queries::weather::{DEFAULT_WEATHER_LOCATION, api_key_from_env};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const HUARAZ_DIR: &str = ".huaraz";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    pub enabled: bool,
    pub location: String,
    pub timeout_secs: u64,
    /// Used only when no weather key is set in the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            location: DEFAULT_WEATHER_LOCATION.to_string(),
            timeout_secs: 10,
            api_key: None,
        }
    }
}

impl WeatherConfig {
    /// Environment keys win over `api_key`; blank values are skipped.
    pub fn client(&self) -> Result<WeatherClient> {
        let api_key = api_key_from_env().or_else(|| {
            self.api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
        });

        WeatherClient::new(api_key, Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: Option<String>,
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f64,
    /// Overrides the profile's iteration limit when set.
    pub max_iterations: Option<usize>,
    /// Recent exchanges replayed to the model each turn; zero replays all of them.
    pub max_history: usize,
    pub profile: AgentProfile,
    pub weather: WeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: None,
            api_key: String::new(),
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_iterations: None,
            max_history: 20,
            profile: AgentProfile::Standard,
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        if config_exists() {
            load_config()
        } else {
            Ok(Config::default())
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.as_deref().unwrap_or("openai")
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or_else(|| self.profile.max_iterations())
    }
}

pub fn get_huaraz_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(HUARAZ_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_huaraz_dir().join("config.toml")
}

pub fn ensure_huaraz_dir() -> Result<PathBuf> {
    let dir = get_huaraz_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create huaraz directory at {}", dir.display()))?;
    }

    Ok(dir)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "Config file not found. Run 'huaraz onboard' to set up your configuration."
            )
        } else {
            anyhow::anyhow!("Failed to read config from {}: {}", config_path.display(), e)
        }
    })?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    ensure_huaraz_dir()?;
    save_config_to(config, &get_config_path())
}

pub fn save_config_to(config: &Config, config_path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}

pub fn config_exists() -> bool {
    get_config_path().exists()
}
