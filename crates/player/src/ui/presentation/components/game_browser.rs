//! Game browser - the list of available CYOA games

use dioxus::prelude::*;
use parlor_domain::CyoaGameSummary;

use crate::routes::Route;

/// Props for the GameBrowser component
#[derive(Props, Clone, PartialEq)]
pub struct GameBrowserProps {
    pub games: Vec<CyoaGameSummary>,
    pub loading: bool,
    #[props(default)]
    pub error_message: Option<String>,
}

/// Card grid of games, each linking to its story view
#[component]
pub fn GameBrowser(props: GameBrowserProps) -> Element {
    if let Some(message) = props.error_message.as_ref() {
        return rsx! {
            main {
                class: "page game-browser",
                h1 { class: "page-title", "Choose Your Own Adventure" }
                div { class: "alert alert-error", role: "alert", "{message}" }
            }
        };
    }

    rsx! {
        main {
            class: "page game-browser",

            h1 { class: "page-title", "Choose Your Own Adventure" }

            if props.loading {
                div {
                    class: "game-grid",
                    for i in 0..3 {
                        div { key: "{i}", class: "game-card skeleton" }
                    }
                }
            } else if props.games.is_empty() {
                div {
                    class: "empty-state",
                    h2 { "No games available at the moment" }
                    p { "Please check back later for new adventures" }
                }
            } else {
                div {
                    class: "game-grid",
                    for summary in props.games.iter() {
                        GameCard { key: "{summary.game_id}", summary: summary.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn GameCard(summary: CyoaGameSummary) -> Element {
    let navigator = use_navigator();
    let game_id = summary.game_id.clone();
    let game = &summary.game;

    rsx! {
        div {
            class: "game-card",
            if let Some(image) = game.image.as_ref() {
                img { class: "game-card-image", src: "{image}", alt: "{game.title}" }
            }
            div {
                class: "game-card-body",
                h2 { class: "game-card-title", "{game.title}" }
                p { class: "game-card-description", "{game.description}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::story(&game_id));
                    },
                    "Play Game"
                }
            }
        }
    }
}
