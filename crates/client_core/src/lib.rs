use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Profile, ProfileOutcome},
    error::ServiceError,
};
use tracing::{info, warn};
use url::Url;

mod gemini;
pub mod prompt;
pub mod settings;

use gemini::{extract_text, map_http_error, GenerateContentRequest, GenerateContentResponse};
pub use settings::{load_dataset, load_settings, Locale, Settings};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Single-attempt profile lookup. A sentinel reply is `Ok(ProfileOutcome::Insufficient)`.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch(&self, person: &str) -> Result<ProfileOutcome, ServiceError>;
}

/// Where the API key comes from. Resolved on every fetch, before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    Env(String),
    Fixed(String),
}

impl ApiKeySource {
    pub fn resolve(&self) -> Result<String, ServiceError> {
        let key = match self {
            Self::Env(name) => std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ServiceError::missing_credential(name))?,
            Self::Fixed(key) if key.trim().is_empty() => {
                return Err(ServiceError::Configuration(
                    "configured API key is blank".to_string(),
                ))
            }
            Self::Fixed(key) => key.clone(),
        };
        Ok(key.trim().to_string())
    }
}

pub struct GeminiProfileFetcher {
    http: Client,
    base_url: Url,
    model: String,
    temperature: f32,
    key_source: ApiKeySource,
}

impl GeminiProfileFetcher {
    pub fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        let base_url = Url::parse(settings.base_url.trim()).map_err(|err| {
            ServiceError::Configuration(format!(
                "invalid generation base_url '{}': {err}",
                settings.base_url
            ))
        })?;
        if settings.model.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "generation model name must not be empty".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|err| {
            ServiceError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            http,
            base_url,
            model: settings.model.trim().to_string(),
            temperature: settings.temperature,
            key_source: ApiKeySource::Env(settings.api_key_env.clone()),
        })
    }

    pub fn with_key_source(mut self, key_source: ApiKeySource) -> Self {
        self.key_source = key_source;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(&self, api_key: &str, person: &str) -> Result<String, ServiceError> {
        let request = GenerateContentRequest::structured(
            prompt::profile_prompt(person),
            prompt::response_schema(),
            self.temperature,
        );

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::Malformed(format!("unexpected response envelope: {err}")))?;
        extract_text(parsed)
    }
}

#[async_trait]
impl ProfileFetcher for GeminiProfileFetcher {
    async fn fetch(&self, person: &str) -> Result<ProfileOutcome, ServiceError> {
        let api_key = self.key_source.resolve()?;
        info!(person, model = %self.model, "requesting profile");

        let result = self.generate(&api_key, person).await.and_then(|text| {
            serde_json::from_str::<Profile>(text.trim())
                .map(ProfileOutcome::from_profile)
                .map_err(|err| ServiceError::Malformed(err.to_string()))
        });

        match &result {
            Ok(outcome) => info!(person, outcome = outcome.label(), "profile request finished"),
            Err(err) => warn!(person, kind = err.kind(), "profile request failed: {err}"),
        }
        result
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
