//! Game list state

use dioxus::prelude::*;
use parlor_domain::CyoaGameSummary;

use crate::presentation::services::use_cyoa_service;

pub const GAMES_LOAD_ERROR: &str = "Unable to load games";

/// Signals behind the game browser
#[derive(Clone, Copy)]
pub struct CyoaGamesState {
    pub games: Signal<Vec<CyoaGameSummary>>,
    pub is_loading: Signal<bool>,
    pub error_message: Signal<Option<String>>,
}

/// Fetch the game list once on mount
pub fn use_cyoa_games() -> CyoaGamesState {
    let service = use_cyoa_service();
    let mut games = use_signal(Vec::new);
    let mut is_loading = use_signal(|| true);
    let mut error_message = use_signal(|| None::<String>);

    use_future(move || {
        let service = service.clone();
        async move {
            match service.list_games().await {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "Loaded games");
                    games.set(list);
                }
                Err(e) => {
                    tracing::error!(operation = "list_games", error = %e, "{}", GAMES_LOAD_ERROR);
                    error_message.set(Some(GAMES_LOAD_ERROR.to_string()));
                }
            }
            is_loading.set(false);
        }
    });

    CyoaGamesState {
        games,
        is_loading,
        error_message,
    }
}
