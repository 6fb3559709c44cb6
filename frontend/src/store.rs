#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use shared::models::*;
use std::rc::Rc;
use yew::prelude::*;

/// One child of the conversation container.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversationEntry {
    Welcome,
    Message(Bubble),
}

/// Current value of each provider's model selector.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelSelection {
    pub openai: String,
    pub anthropic: String,
    pub gemini: String,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            openai: default_model(Provider::OpenAi).to_string(),
            anthropic: default_model(Provider::Anthropic).to_string(),
            gemini: default_model(Provider::GoogleGemini).to_string(),
        }
    }
}

impl ModelSelection {
    pub fn get(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Anthropic => &self.anthropic,
            Provider::GoogleGemini => &self.gemini,
        }
    }

    fn set(&mut self, provider: Provider, model: String) {
        match provider {
            Provider::OpenAi => self.openai = model,
            Provider::Anthropic => self.anthropic = model,
            Provider::GoogleGemini => self.gemini = model,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub settings_open: bool,
    pub provider: Provider,
    pub models: ModelSelection,
    pub temperature: f32,
    pub max_tokens: u32,
    pub prompt: String,
    pub conversation: Vec<ConversationEntry>,
    pub loading: bool,
    pub stop_visible: bool,
}

impl Default for State {
    fn default() -> Self {
        let defaults = ModelSettings::default();
        Self {
            settings_open: false,
            provider: defaults.provider,
            models: ModelSelection::default(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            prompt: String::new(),
            conversation: vec![ConversationEntry::Welcome],
            loading: false,
            stop_visible: false,
        }
    }
}

impl State {
    pub fn selected_model(&self) -> &str {
        self.models.get(self.provider)
    }

    /// Inline style for a model group: only the current provider's group shows.
    pub fn model_group_style(&self, group: Provider) -> &'static str {
        if self.provider == group { "" } else { "display: none" }
    }

    /// Browser string length, i.e. UTF-16 code units.
    pub fn char_counter(&self) -> String {
        format!("{} chars", self.prompt.encode_utf16().count())
    }

    pub fn temperature_label(&self) -> String {
        format!("{:.1}", self.temperature)
    }

    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            provider: self.provider,
            model: self.selected_model().to_string(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.conversation.iter().filter_map(|entry| match entry {
            ConversationEntry::Message(bubble) => Some(bubble),
            ConversationEntry::Welcome => None,
        })
    }

    fn bubble_mut(&mut self, id: BubbleId) -> Option<&mut Bubble> {
        self.conversation.iter_mut().find_map(|entry| match entry {
            ConversationEntry::Message(bubble) if bubble.id == id => Some(bubble),
            _ => None,
        })
    }

    fn apply_saved(&mut self, saved: &SavedSettings) {
        if let Some(provider) = saved.provider {
            self.provider = provider;
        }
        if let Some(model) = &saved.model {
            self.models.set(saved.model_target(), model.clone());
        }
        if let Some(temperature) = saved.temperature {
            self.temperature = clamp_temperature(temperature);
        }
        if let Some(max_tokens) = saved.max_tokens {
            self.max_tokens = max_tokens;
        }
    }
}

pub enum Action {
    ToggleSettingsPanel,
    ApplyProvider(Provider),
    SetModel { provider: Provider, model: String },
    SetTemperature(f32),
    SetMaxTokens(u32),
    SetPrompt(String),
    Restore(SavedSettings),
    Send,
    Stop,
    Clear,
    ShowLoading(bool),
    AddBubble(Bubble),
    SetTyping { bubble: Option<BubbleId>, typing: bool },
    SetBubbleText { bubble: BubbleId, text: String },
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::ToggleSettingsPanel => {
                next.settings_open = !next.settings_open;
            }
            Action::ApplyProvider(provider) => {
                next.provider = provider;
            }
            Action::SetModel { provider, model } => {
                next.models.set(provider, model);
            }
            Action::SetTemperature(temperature) => {
                next.temperature = clamp_temperature(temperature);
            }
            Action::SetMaxTokens(max_tokens) => {
                if max_tokens > 0 {
                    next.max_tokens = max_tokens;
                }
            }
            Action::SetPrompt(prompt) => {
                next.prompt = prompt;
            }
            Action::Restore(saved) => {
                next.apply_saved(&saved);
            }
            Action::Send => {
                let text = next.prompt.trim();
                if text.is_empty() {
                    return self;
                }
                let bubble = Bubble::user(text);
                next.conversation.push(ConversationEntry::Message(bubble));
                next.prompt.clear();
                next.loading = true;
                next.stop_visible = true;
            }
            Action::Stop => {
                next.stop_visible = false;
                next.loading = false;
            }
            Action::Clear => {
                next.conversation = vec![ConversationEntry::Welcome];
            }
            Action::ShowLoading(visible) => {
                next.loading = visible;
            }
            Action::AddBubble(bubble) => {
                next.conversation.push(ConversationEntry::Message(bubble));
            }
            Action::SetTyping { bubble, typing } => {
                if let Some(id) = bubble
                    && let Some(bubble) = next.bubble_mut(id)
                {
                    bubble.typing = typing;
                }
            }
            Action::SetBubbleText { bubble, text } => {
                if let Some(bubble) = next.bubble_mut(bubble) {
                    bubble.text = text;
                }
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;
