use super::*;
use serde_json::json;

// =============================================================
// Provider
// =============================================================

#[test]
fn provider_default_is_openai() {
    assert_eq!(Provider::default(), Provider::OpenAi);
}

#[test]
fn provider_parses_wire_tags() {
    assert_eq!("openai".parse::<Provider>(), Ok(Provider::OpenAi));
    assert_eq!("anthropic".parse::<Provider>(), Ok(Provider::Anthropic));
    assert_eq!("google_gemini".parse::<Provider>(), Ok(Provider::GoogleGemini));
}

#[test]
fn provider_rejects_unknown_tag() {
    assert_eq!(
        "mistral".parse::<Provider>(),
        Err(UnknownProvider("mistral".to_string()))
    );
}

#[test]
fn provider_serializes_as_wire_tag() {
    for provider in Provider::ALL {
        let encoded = serde_json::to_value(provider).unwrap();
        assert_eq!(encoded, json!(provider.as_str()));
    }
}

// =============================================================
// ModelSettings
// =============================================================

#[test]
fn model_settings_json_uses_storage_field_names() {
    let settings = ModelSettings {
        provider: Provider::Anthropic,
        model: "claude-x".to_string(),
        temperature: 0.7,
        max_tokens: 512,
    };
    let encoded = serde_json::to_value(&settings).unwrap();
    assert_eq!(
        encoded,
        json!({
            "provider": "anthropic",
            "model": "claude-x",
            "temperature": 0.7f32,
            "max_tokens": 512
        })
    );
}

#[test]
fn model_settings_default_model_belongs_to_default_provider() {
    let settings = ModelSettings::default();
    assert!(
        catalog::models(settings.provider)
            .iter()
            .any(|m| m.id == settings.model)
    );
}

#[test]
fn clamp_temperature_bounds() {
    assert_eq!(clamp_temperature(-1.0), 0.0);
    assert_eq!(clamp_temperature(3.5), 2.0);
    assert_eq!(clamp_temperature(1.3), 1.3);
}

// =============================================================
// SavedSettings
// =============================================================

#[test]
fn saved_settings_full_record() {
    let saved = SavedSettings::parse(
        r#"{"provider":"anthropic","model":"claude-x","temperature":0.7,"max_tokens":512}"#,
    )
    .unwrap();
    assert_eq!(saved.provider, Some(Provider::Anthropic));
    assert_eq!(saved.model.as_deref(), Some("claude-x"));
    assert_eq!(saved.temperature, Some(0.7));
    assert_eq!(saved.max_tokens, Some(512));
}

#[test]
fn saved_settings_empty_object_is_empty() {
    assert!(SavedSettings::parse("{}").unwrap().is_empty());
}

#[test]
fn saved_settings_non_object_is_empty() {
    assert!(SavedSettings::parse("null").unwrap().is_empty());
    assert!(SavedSettings::parse("42").unwrap().is_empty());
    assert!(SavedSettings::parse("[1,2]").unwrap().is_empty());
}

#[test]
fn saved_settings_invalid_json_is_error() {
    assert!(SavedSettings::parse("{not json").is_err());
}

#[test]
fn saved_settings_skips_fields_of_wrong_type() {
    let saved = SavedSettings::parse(
        r#"{"provider":7,"model":"","temperature":"hot","max_tokens":"many"}"#,
    )
    .unwrap();
    assert!(saved.is_empty());
}

#[test]
fn saved_settings_rejects_non_positive_max_tokens() {
    assert_eq!(SavedSettings::parse(r#"{"max_tokens":0}"#).unwrap().max_tokens, None);
    assert_eq!(SavedSettings::parse(r#"{"max_tokens":-5}"#).unwrap().max_tokens, None);
    assert_eq!(SavedSettings::parse(r#"{"max_tokens":1.5}"#).unwrap().max_tokens, None);
}

#[test]
fn saved_settings_partial_record() {
    let saved = SavedSettings::parse(r#"{"temperature":1.2}"#).unwrap();
    assert_eq!(saved.temperature, Some(1.2));
    assert_eq!(saved.provider, None);
    assert_eq!(saved.model, None);
    assert_eq!(saved.max_tokens, None);
}

#[test]
fn saved_settings_unknown_provider_is_dropped() {
    let saved = SavedSettings::parse(r#"{"provider":"mistral","model":"m"}"#).unwrap();
    assert_eq!(saved.provider, None);
    assert_eq!(saved.model.as_deref(), Some("m"));
}

#[test]
fn model_target_follows_saved_provider() {
    let mut saved = SavedSettings::default();
    assert_eq!(saved.model_target(), Provider::GoogleGemini);

    saved.provider = Some(Provider::OpenAi);
    assert_eq!(saved.model_target(), Provider::OpenAi);

    saved.provider = Some(Provider::Anthropic);
    assert_eq!(saved.model_target(), Provider::Anthropic);

    saved.provider = Some(Provider::GoogleGemini);
    assert_eq!(saved.model_target(), Provider::GoogleGemini);
}

#[test]
fn saved_settings_from_model_settings() {
    let saved = SavedSettings::from(ModelSettings::default());
    assert_eq!(saved.provider, Some(Provider::OpenAi));
    assert_eq!(saved.temperature, Some(0.7));
    assert_eq!(saved.max_tokens, Some(1024));
    assert!(saved.model.is_some());
}
