use super::feedback::FeedbackButton;
use crate::persistence::{self, BrowserStore};
use crate::store::{Action, StoreContext};
use shared::models::{Provider, is_known_model, models};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ModelGroupProps {
    provider: Provider,
}

/// One provider's model selector. Hidden unless its provider is selected.
#[function_component(ModelGroup)]
fn model_group(props: &ModelGroupProps) -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let provider = props.provider;
    let current = store.models.get(provider).to_string();

    let on_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            store.dispatch(Action::SetModel {
                provider,
                model: select.value(),
            });
        })
    };

    let (group_id, group_class, select_id) = match provider {
        Provider::OpenAi => (None, "form-group openai-models", "openaiModelSelect"),
        Provider::Anthropic => (None, "form-group anthropic-models", "anthropicModelSelect"),
        Provider::GoogleGemini => (Some("geminiModelGroup"), "form-group", "geminiModelSelect"),
    };

    html! {
        <div id={group_id} class={group_class} style={store.model_group_style(provider)}>
            <label class="form-label">{format!("{} Model", provider.label())}</label>
            <select id={select_id} class="form-select" onchange={on_change}>
                {for models(provider).iter().map(|m| html! {
                    <option value={m.id} selected={m.id == current}>{m.label}</option>
                })}
                // Restored models that are not in the catalog still show up.
                if !is_known_model(provider, &current) {
                    <option value={current.clone()} selected=true>{current.clone()}</option>
                }
            </select>
        </div>
    }
}

#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let on_toggle = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::ToggleSettingsPanel))
    };

    let on_provider_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Provider>() {
                Ok(provider) => store.dispatch(Action::ApplyProvider(provider)),
                Err(e) => tracing::warn!("Ignoring provider selection: {e}"),
            }
        })
    };

    let on_temperature_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<f32>() {
                store.dispatch(Action::SetTemperature(val));
            }
        })
    };

    let on_max_tokens_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<u32>() {
                store.dispatch(Action::SetMaxTokens(val));
            }
        })
    };

    let on_save = {
        let store = store.clone();
        Callback::from(move |_| {
            let settings = store.model_settings();
            match persistence::save_settings(&BrowserStore, &settings) {
                Ok(()) => tracing::debug!("Saved settings for {}", settings.provider),
                Err(e) => tracing::warn!("Could not persist settings: {e}"),
            }
        })
    };

    html! {
        <>
            <button id="settingsIcon" class="icon-btn settings-icon" onclick={on_toggle} title="Settings">
                <svg viewBox="0 0 24 24"><path d="M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L3.16 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z"></path></svg>
            </button>

            <aside id="settingsPanel" class={classes!("settings-panel", store.settings_open.then_some("open"))}>
                <h2 class="panel-title">{"Model Settings"}</h2>

                <div class="form-group">
                    <label class="form-label">{"Provider"}</label>
                    <select id="providerSelect" class="form-select" onchange={on_provider_change}>
                        {for Provider::ALL.into_iter().map(|p| html! {
                            <option value={p.as_str()} selected={p == store.provider}>{p.label()}</option>
                        })}
                    </select>
                </div>

                <ModelGroup provider={Provider::OpenAi} />
                <ModelGroup provider={Provider::Anthropic} />
                <ModelGroup provider={Provider::GoogleGemini} />

                <div class="form-group">
                    <label class="form-label">
                        {"Temperature: "}
                        <span id="temperatureValue">{store.temperature_label()}</span>
                    </label>
                    <input id="temperatureSlider" type="range" class="form-range"
                        min="0" max="2" step="0.1"
                        value={store.temperature.to_string()}
                        oninput={on_temperature_input}
                    />
                </div>

                <div class="form-group">
                    <label class="form-label">{"Max Tokens"}</label>
                    <input id="maxTokensInput" type="number" class="form-input"
                        min="1"
                        value={store.max_tokens.to_string()}
                        oninput={on_max_tokens_input}
                    />
                </div>

                <FeedbackButton
                    id="saveSettingsBtn"
                    class={classes!("btn", "btn-primary")}
                    label="Save Settings"
                    onclick={on_save}
                />
            </aside>
        </>
    }
}
