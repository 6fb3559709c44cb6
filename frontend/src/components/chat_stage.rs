use super::feedback::FeedbackButton;
use crate::store::{Action, ConversationEntry, StoreContext};
use shared::models::Bubble;
use web_sys::{Element, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub bubble: Bubble,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let bubble = &props.bubble;
    html! {
        <div class={classes!("message", bubble.role.css_class(), bubble.typing.then_some("typing"))}>
            {bubble.text.clone()}
        </div>
    }
}

#[function_component(WelcomeMessage)]
pub fn welcome_message() -> Html {
    html! {
        <div class="welcome-message">
            <h2>{"Welcome to the SALLM Interaction Interface!"}</h2>
            <h3 style="color: blue;">{"Project Developed by Kushagra Tiwari!"}</h3>
            <p>{"Enter your prompt below to start a conversation with an AI language model."}</p>
        </div>
    }
}

#[function_component(ChatStage)]
pub fn chat_stage() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let container_ref = use_node_ref();

    // Keep the newest bubble in view
    {
        let container_ref = container_ref.clone();
        let entries = store.conversation.len();
        use_effect_with(entries, move |_| {
            if let Some(div) = container_ref.cast::<Element>() {
                div.set_scroll_top(div.scroll_height());
            }
            || {}
        });
    }

    let on_prompt_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                store.dispatch(Action::SetPrompt(textarea.value()));
            }
        })
    };

    let on_send = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::Send))
    };

    let on_keydown = {
        let on_send = on_send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_send.emit(());
            }
        })
    };

    let on_stop = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::Stop))
    };

    let on_clear = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::Clear))
    };

    // Export is not wired up; the button only acknowledges the click.
    let on_save_chat = Callback::from(|_| tracing::debug!("Save chat requested"));

    html! {
        <div class="main-stage">
            <div id="conversation" class="conversation" ref={container_ref}>
                { for store.conversation.iter().map(|entry| match entry {
                    ConversationEntry::Welcome => html! { <WelcomeMessage /> },
                    ConversationEntry::Message(bubble) => html! {
                        <MessageBubble key={bubble.id.to_string()} bubble={bubble.clone()} />
                    },
                })}
            </div>

            <div id="loadingIndicator" class="loading-indicator"
                style={if store.loading { "display: flex" } else { "display: none" }}>
                <span></span>
                <span></span>
                <span></span>
            </div>

            <div class="input-area">
                <div class="input-box">
                    <textarea
                        id="promptInput"
                        class="chat-input"
                        placeholder={"Enter your prompt..."}
                        value={store.prompt.clone()}
                        oninput={on_prompt_input}
                        onkeydown={on_keydown}
                    />
                    <div id="charCounter" class="char-counter">{store.char_counter()}</div>
                </div>
                <div class="input-actions">
                    <button id="sendButton" class="btn btn-primary" onclick={move |_| on_send.emit(())}>
                        {"Send"}
                    </button>
                    <button id="stopButton" class="btn btn-danger"
                        style={if store.stop_visible { "" } else { "display: none" }}
                        onclick={on_stop}>
                        {"Stop"}
                    </button>
                    <button id="clearButton" class="btn btn-secondary" onclick={on_clear}>
                        {"Clear"}
                    </button>
                    <FeedbackButton
                        id="saveButton"
                        class={classes!("btn", "btn-secondary")}
                        label="Save Chat"
                        onclick={on_save_chat}
                    />
                </div>
            </div>
        </div>
    }
}
