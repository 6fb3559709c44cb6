#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const FEEDBACK_LABEL: &str = "Saved ✓";
pub const FEEDBACK_MS: u32 = 900;

pub fn button_label(label: &str, acknowledged: bool) -> &str {
    if acknowledged { FEEDBACK_LABEL } else { label }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackButtonProps {
    pub id: AttrValue,
    pub class: Classes,
    pub label: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub onclick: Callback<()>,
}

/// Button that reads "Saved ✓" and stays disabled for a moment after a click.
///
/// The revert timer is owned by the component; unmounting drops it, which
/// cancels the pending revert.
#[function_component(FeedbackButton)]
pub fn feedback_button(props: &FeedbackButtonProps) -> Html {
    let acknowledged = use_state(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let on_click = {
        let acknowledged = acknowledged.clone();
        let timer = timer.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| {
            onclick.emit(());
            acknowledged.set(true);

            let acknowledged = acknowledged.clone();
            // Replacing a pending timeout drops (and cancels) it.
            *timer.borrow_mut() = Some(Timeout::new(FEEDBACK_MS, move || {
                acknowledged.set(false);
            }));
        })
    };

    html! {
        <button
            id={props.id.clone()}
            class={props.class.clone()}
            title={props.title.clone()}
            disabled={*acknowledged}
            onclick={on_click}
        >
            {button_label(&props.label, *acknowledged)}
        </button>
    }
}
