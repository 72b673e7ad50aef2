//! Story engine - container that drives a StorySession
//!
//! The session lives in a signal; `CyoaService` sequences the fetches against
//! it. A new game id starts a fresh session, and results still in flight for
//! the previous game are dropped by the service.

use dioxus::prelude::*;
use parlor_domain::{GameId, StorySession};

use crate::application::services::StoryCell;
use crate::presentation::components::NarrativeDisplay;
use crate::presentation::services::use_cyoa_service;
use crate::routes::Route;

impl StoryCell for Signal<StorySession> {
    fn update<R>(&mut self, f: impl FnOnce(&mut StorySession) -> R) -> R {
        self.with_mut(f)
    }
}

/// Play view for one CYOA game
#[component]
pub fn StoryEngine(game_id: String) -> Element {
    let service = use_cyoa_service();
    let navigator = use_navigator();
    let mut session = use_signal({
        let initial_id = GameId::new(game_id.clone());
        move || StorySession::new(initial_id)
    });

    let start_service = service.clone();
    use_effect(use_reactive((&game_id,), move |(game_id,)| {
        let game_id = GameId::new(game_id);
        if session.peek().game_id() != &game_id {
            tracing::debug!(%game_id, "Switching story");
            session.set(StorySession::new(game_id));
        }
        let service = start_service.clone();
        spawn(async move {
            let mut cell = session;
            service.start_story(&mut cell).await;
        });
    }));

    let choice_service = service.clone();
    let on_choice = move |index: usize| {
        let service = choice_service.clone();
        spawn(async move {
            let mut cell = session;
            service.choose(&mut cell, index).await;
        });
    };

    let retry_service = service.clone();
    let on_retry = EventHandler::new(move |_: ()| {
        let service = retry_service.clone();
        spawn(async move {
            let mut cell = session;
            service.retry(&mut cell).await;
        });
    });

    let state = session.read();

    if state.is_fatal() {
        let message = state.error_message().unwrap_or_default();
        return rsx! {
            div {
                class: "story-error",
                div {
                    class: "alert alert-error",
                    role: "alert",
                    "{message}"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        };
    }

    match state.game() {
        Some(game) => rsx! {
            NarrativeDisplay {
                game: game.clone(),
                narrative: state.narrative().cloned(),
                loading: state.is_loading(),
                error_message: state.error_message().map(str::to_string),
                on_choice: on_choice,
                on_retry: on_retry,
                on_back: move |_| {
                    navigator.push(Route::GameBrowserRoute {});
                },
            }
        },
        None => rsx! {
            div { class: "story-loading", "Loading story..." }
        },
    }
}
