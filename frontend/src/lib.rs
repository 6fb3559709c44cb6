pub mod components;
pub mod helpers;
pub mod persistence;
pub mod store;

use components::chat_stage::ChatStage;
use components::settings_panel::SettingsPanel;
use helpers::UiHelpers;
use persistence::BrowserStore;
use store::{Action, State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(State::default);

    // Restore saved settings once, on page load
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = persistence::restore_settings(&BrowserStore) {
                store.dispatch(Action::Restore(saved));
            }
            || {}
        });
    }

    let helpers = UiHelpers::new(store.clone());

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <ContextProvider<UiHelpers> context={helpers}>
                <div class="app-container">
                    <header class="app-header">
                        <h1 class="app-title">{"SALLM Interaction Interface"}</h1>
                        <SettingsPanel />
                    </header>
                    <ChatStage />
                </div>
            </ContextProvider<UiHelpers>>
        </ContextProvider<StoreContext>>
    }
}
