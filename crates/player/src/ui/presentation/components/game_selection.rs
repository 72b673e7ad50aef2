//! Dropdown of published puzzles

use dioxus::prelude::*;
use parlor_domain::short_date_label;

use crate::presentation::state::use_game_ids;
use crate::routes::Route;

/// Choosing an entry navigates to that puzzle
#[component]
pub fn GameSelection(game_id: String) -> Element {
    let state = use_game_ids();
    let navigator = use_navigator();

    let is_loading = *state.is_loading.read();
    let error_message = state.error_message.read().clone();
    let game_ids = state.game_ids.read();

    rsx! {
        div {
            class: "game-selection",
            if !is_loading {
                label { r#for: "select-game", "Select game" }
                select {
                    id: "select-game",
                    class: "select",
                    value: "{game_id}",
                    onchange: move |evt: Event<FormData>| {
                        navigator.push(Route::puzzle(evt.value()));
                    },
                    for id in game_ids.iter() {
                        option {
                            key: "{id}",
                            value: "{id}",
                            selected: id.as_str() == game_id,
                            {short_date_label(id)}
                        }
                    }
                }
            }
            if let Some(message) = error_message {
                div { class: "alert alert-error", role: "alert", "{message}" }
            }
        }
    }
}
