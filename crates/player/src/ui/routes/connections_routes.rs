//! Puzzle route handlers

use dioxus::prelude::*;
use parlor_domain::today_game_id;

use super::{Route, CONNECTIONS_PAGE_TITLE};
use crate::presentation::components::ConnectionsGame;
use crate::use_platform;

/// Today's puzzle - redirects to the dated route
#[component]
pub fn TodayPuzzleRoute() -> Element {
    let navigator = use_navigator();
    let platform = use_platform();

    use_effect(move || {
        let game_id = today_game_id(platform.now_millis());
        navigator.replace(Route::puzzle(game_id));
    });

    // Minimal placeholder while the effect redirects
    rsx! {
        div {
            class: "page loading",
            "Loading puzzle..."
        }
    }
}

/// Play view for one dated puzzle
#[component]
pub fn ConnectionsRoute(game_id: String) -> Element {
    let platform = use_platform();
    use_effect(move || platform.set_page_title(CONNECTIONS_PAGE_TITLE));

    rsx! {
        main {
            class: "page connections-page",
            ConnectionsGame { game_id: game_id.clone() }
        }
    }
}
