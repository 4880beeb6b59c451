//! Layered settings: defaults, then an optional TOML file, then `APP__*` env overrides.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::Deserialize;
use shared::dataset::Dataset;

pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const SETTINGS_FILE_NAME: &str = "exec_summary.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "th" | "thai" => Ok(Self::Th),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unsupported locale '{other}' (expected th or en)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Th => "th",
            Self::En => "en",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the env var holding the API key. The key itself is never stored here.
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub request_timeout_secs: Option<u64>,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: None,
            locale: Locale::default(),
        }
    }
}

/// Loads settings from `explicit_path`, or from the first default location that exists.
///
/// An explicit path must exist. Default locations are optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => match default_settings_path() {
            Some(path) => read_settings_file(&path)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("exec_summary").join("config.toml"))
        .filter(|path| path.is_file())
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__API_KEY_ENV").filter(|v| !v.trim().is_empty()) {
        settings.api_key_env = v;
    }
    if let Some(v) = lookup("APP__MODEL").filter(|v| !v.trim().is_empty()) {
        settings.model = v;
    }
    if let Some(v) = lookup("APP__BASE_URL").filter(|v| !v.trim().is_empty()) {
        settings.base_url = v;
    }
    if let Some(v) = lookup("APP__TEMPERATURE") {
        match v.parse::<f32>() {
            Ok(parsed) => settings.temperature = parsed,
            Err(err) => tracing::warn!(value = %v, "ignoring APP__TEMPERATURE: {err}"),
        }
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(err) => tracing::warn!(value = %v, "ignoring APP__REQUEST_TIMEOUT_SECS: {err}"),
        }
    }
    if let Some(v) = lookup("APP__LOCALE") {
        match v.parse::<Locale>() {
            Ok(locale) => settings.locale = locale,
            Err(err) => tracing::warn!("ignoring APP__LOCALE: {err}"),
        }
    }
}

/// Loads a replacement directory from a JSON file, or the built-in one.
pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    let Some(path) = path else {
        return Ok(Dataset::builtin());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file '{}'", path.display()))?;
    Dataset::from_json(&raw)
        .with_context(|| format!("invalid dataset file '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
