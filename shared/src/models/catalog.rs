//! Static model lists offered by each provider's model selector.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::settings::Provider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

const OPENAI_MODELS: &[ModelOption] = &[
    ModelOption { id: "gpt-4o-mini", label: "GPT-4o mini" },
    ModelOption { id: "gpt-4o", label: "GPT-4o" },
    ModelOption { id: "gpt-4-turbo", label: "GPT-4 Turbo" },
    ModelOption { id: "gpt-3.5-turbo", label: "GPT-3.5 Turbo" },
];

const ANTHROPIC_MODELS: &[ModelOption] = &[
    ModelOption { id: "claude-3-5-sonnet-latest", label: "Claude 3.5 Sonnet" },
    ModelOption { id: "claude-3-5-haiku-latest", label: "Claude 3.5 Haiku" },
    ModelOption { id: "claude-3-opus-latest", label: "Claude 3 Opus" },
];

const GEMINI_MODELS: &[ModelOption] = &[
    ModelOption { id: "gemini-1.5-flash", label: "Gemini 1.5 Flash" },
    ModelOption { id: "gemini-1.5-pro", label: "Gemini 1.5 Pro" },
    ModelOption { id: "gemini-1.0-pro", label: "Gemini 1.0 Pro" },
];

pub fn models(provider: Provider) -> &'static [ModelOption] {
    match provider {
        Provider::OpenAi => OPENAI_MODELS,
        Provider::Anthropic => ANTHROPIC_MODELS,
        Provider::GoogleGemini => GEMINI_MODELS,
    }
}

/// First entry of the provider's list; what a fresh selector shows.
pub fn default_model(provider: Provider) -> &'static str {
    models(provider).first().map(|m| m.id).unwrap_or_default()
}

pub fn is_known_model(provider: Provider, id: &str) -> bool {
    models(provider).iter().any(|m| m.id == id)
}
