//! Conversation helpers handed to integration code through context.
//!
//! Whatever eventually talks to a model (request, streaming, abort) lives
//! outside this crate's controller. It obtains these with
//! `use_context::<UiHelpers>()` and drives the page through them.

use crate::store::{Action, StoreContext};
use shared::models::{Bubble, BubbleId, Role};

#[derive(Clone, PartialEq)]
pub struct UiHelpers {
    store: StoreContext,
}

impl UiHelpers {
    pub fn new(store: StoreContext) -> Self {
        Self { store }
    }

    /// Appends a bubble and returns its handle for later `set_typing` or
    /// `set_bubble_text` calls. The conversation scrolls to the bottom.
    pub fn add_message_bubble(&self, text: impl Into<String>, role: Role) -> BubbleId {
        let bubble = Bubble::new(role, text);
        let id = bubble.id;
        self.store.dispatch(Action::AddBubble(bubble));
        id
    }

    pub fn set_typing(&self, bubble: Option<BubbleId>, typing: bool) {
        self.store.dispatch(Action::SetTyping { bubble, typing });
    }

    pub fn set_bubble_text(&self, bubble: BubbleId, text: impl Into<String>) {
        self.store.dispatch(Action::SetBubbleText {
            bubble,
            text: text.into(),
        });
    }

    pub fn show_loading(&self, visible: bool) {
        self.store.dispatch(Action::ShowLoading(visible));
    }

    pub fn selected_model(&self) -> String {
        self.store.selected_model().to_string()
    }
}
