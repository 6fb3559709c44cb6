#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to a bubble in the conversation, returned when the bubble is added.
pub type BubbleId = Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[default]
    Ai,
}

impl Role {
    /// Anything other than "user" renders as an AI bubble.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "user" { Role::User } else { Role::Ai }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user-message",
            Role::Ai => "ai-message",
        }
    }
}

/// A single rendered message in the conversation view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: BubbleId,
    pub role: Role,
    /// Plain text; never interpreted as markup.
    pub text: String,
    #[serde(default)]
    pub typing: bool,
}

impl Bubble {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            text: text.into(),
            typing: false,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Role::Ai, text)
    }
}
