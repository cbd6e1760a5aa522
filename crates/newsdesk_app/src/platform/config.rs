use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use newsdesk_engine::{FetchSettings, GeminiSettings, WorldNewsSettings};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "newsdesk.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid configuration in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Backend {
    #[default]
    Fixture,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    pub base_url: String,
    pub trending_query: String,
    pub number: u32,
}

impl Default for LiveConfig {
    fn default() -> Self {
        let defaults = WorldNewsSettings::default();
        Self {
            base_url: defaults.base_url,
            trending_query: defaults.trending_query,
            number: defaults.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        let defaults = GeminiSettings::default();
        Self {
            base_url: defaults.base_url,
            model: defaults.model,
        }
    }
}

/// Contents of `newsdesk.ron`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: Backend,
    pub fixture_latency_ms: u64,
    pub live: LiveConfig,
    pub summarizer: SummarizerConfig,
    pub log_destination: LogDestination,
    pub log_level: String,
    pub preferences_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Fixture,
            fixture_latency_ms: 500,
            live: LiveConfig::default(),
            summarizer: SummarizerConfig::default(),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            preferences_path: PathBuf::from(".newsdesk_prefs.ron"),
        }
    }
}

impl AppConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn fixture_latency(&self) -> Duration {
        Duration::from_millis(self.fixture_latency_ms)
    }

    pub fn worldnews_settings(&self, credentials: &Credentials) -> WorldNewsSettings {
        WorldNewsSettings {
            base_url: self.live.base_url.clone(),
            api_key: credentials.news_api_key.clone(),
            trending_query: self.live.trending_query.clone(),
            page_size: self.live.number,
            fetch: FetchSettings::default(),
        }
    }

    pub fn gemini_settings(&self, credentials: &Credentials) -> GeminiSettings {
        GeminiSettings {
            base_url: self.summarizer.base_url.clone(),
            model: self.summarizer.model.clone(),
            api_key: credentials.gemini_api_key.clone(),
            fetch: FetchSettings::default(),
        }
    }
}

/// API keys. These never live in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub news_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            news_api_key: present("NEWS_API_KEY"),
            gemini_api_key: present("GEMINI_API_KEY").or_else(|| present("API_KEY")),
        }
    }
}
