//! Story route handlers

use dioxus::prelude::*;

use super::CYOA_PAGE_TITLE;
use crate::presentation::components::{GameBrowser, StoryEngine};
use crate::presentation::state::use_cyoa_games;
use crate::use_platform;

/// Game list
#[component]
pub fn GameBrowserRoute() -> Element {
    let platform = use_platform();
    use_effect(move || platform.set_page_title(CYOA_PAGE_TITLE));

    let state = use_cyoa_games();

    rsx! {
        GameBrowser {
            games: state.games.read().clone(),
            loading: *state.is_loading.read(),
            error_message: state.error_message.read().clone(),
        }
    }
}

/// Play view for one game
#[component]
pub fn StoryRoute(game_id: String) -> Element {
    let platform = use_platform();
    use_effect(move || platform.set_page_title(CYOA_PAGE_TITLE));

    rsx! {
        main {
            class: "page story-page",
            StoryEngine { game_id: game_id.clone() }
        }
    }
}
