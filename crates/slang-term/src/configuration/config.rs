#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

pub const DEFAULT_API_URL: &str = "https://api.urbandictionary.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_CHAR_LIMIT: usize = 156;
pub const DEFAULT_INPUT_WIDTH: u16 = 20;
pub const DEFAULT_PLACEHOLDER: &str = "drip";

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiUrl,
    RequestTimeout,
    CharLimit,
    InputWidth,
    Placeholder,
    LogFile,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ApiUrl => DEFAULT_API_URL.to_string(),
            ConfigKey::RequestTimeout => DEFAULT_REQUEST_TIMEOUT_MS.to_string(),
            ConfigKey::CharLimit => DEFAULT_CHAR_LIMIT.to_string(),
            ConfigKey::InputWidth => DEFAULT_INPUT_WIDTH.to_string(),
            ConfigKey::Placeholder => DEFAULT_PLACEHOLDER.to_string(),
            ConfigKey::LogFile => default_log_path().to_string_lossy().to_string(),
        };

        return res;
    }

    /// Seeds every key with its built-in value. There is no file, environment or flag
    /// source; values only change through `Config::set`.
    pub fn load_defaults() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        tracing::info!(
            api_url = Config::get(ConfigKey::ApiUrl),
            request_timeout = Config::get(ConfigKey::RequestTimeout),
            char_limit = Config::get(ConfigKey::CharLimit),
            "config loaded"
        );
    }

    pub fn request_timeout_ms() -> u64 {
        return Config::get(ConfigKey::RequestTimeout)
            .parse::<u64>()
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
    }

    pub fn char_limit() -> usize {
        return Config::get(ConfigKey::CharLimit)
            .parse::<usize>()
            .unwrap_or(DEFAULT_CHAR_LIMIT);
    }

    pub fn input_width() -> u16 {
        return Config::get(ConfigKey::InputWidth)
            .parse::<u16>()
            .unwrap_or(DEFAULT_INPUT_WIDTH);
    }
}

fn default_log_path() -> path::PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    return base.join("slang-term").join("debug.log");
}
