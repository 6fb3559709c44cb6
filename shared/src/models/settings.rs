#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::catalog;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

/// AI vendor whose model list is active in the settings panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "google_gemini")]
    GoogleGemini,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Anthropic, Provider::GoogleGemini];

    /// Wire tag, also used as the `<option>` value of the provider selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::GoogleGemini => "google_gemini",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::GoogleGemini => "Google Gemini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider `{0}`")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

/// The record persisted on "save settings".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub provider: Provider,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        let provider = Provider::default();
        Self {
            provider,
            model: catalog::default_model(provider).to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

pub fn clamp_temperature(value: f32) -> f32 {
    value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
}

/// A partially trusted view of whatever JSON was found in storage.
///
/// Each field is set only when the stored value is present and of the expected
/// type, so a damaged record still restores the fields that survived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedSettings {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl SavedSettings {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            provider: obj
                .get("provider")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok()),
            model: obj
                .get("model")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            temperature: obj
                .get("temperature")
                .and_then(Value::as_f64)
                .map(|t| t as f32),
            max_tokens: obj
                .get("max_tokens")
                .and_then(Value::as_u64)
                .filter(|n| *n > 0)
                .and_then(|n| u32::try_from(n).ok()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.provider.is_none()
            && self.model.is_none()
            && self.temperature.is_none()
            && self.max_tokens.is_none()
    }

    /// Which model control a saved model belongs to. Anything that is not
    /// OpenAI or Anthropic (including a missing provider) lands on Gemini.
    pub fn model_target(&self) -> Provider {
        match self.provider {
            Some(Provider::OpenAi) => Provider::OpenAi,
            Some(Provider::Anthropic) => Provider::Anthropic,
            _ => Provider::GoogleGemini,
        }
    }
}

impl From<ModelSettings> for SavedSettings {
    fn from(settings: ModelSettings) -> Self {
        Self {
            provider: Some(settings.provider),
            model: Some(settings.model).filter(|m| !m.is_empty()),
            temperature: Some(settings.temperature),
            max_tokens: Some(settings.max_tokens),
        }
    }
}
