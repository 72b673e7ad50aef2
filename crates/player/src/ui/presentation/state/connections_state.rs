//! Puzzle state: the session for the shown game and the list of published games

use std::sync::Arc;

use dioxus::prelude::*;
use parlor_domain::{GameId, PuzzleBoard, PuzzleSession, SubmitOutcome};

use crate::application::services::ConnectionsService;
use crate::presentation::services::use_connections_service;
use crate::{use_platform, Platform};

pub const GAME_LOAD_ERROR: &str = "Unable to load game";
pub const GAME_IDS_LOAD_ERROR: &str = "Unable to load game IDs";

/// Handle on the puzzle session behind the play view
#[derive(Clone, Copy)]
pub struct ConnectionsGameState {
    pub session: Signal<PuzzleSession>,
}

impl ConnectionsGameState {
    pub fn error_message(&self) -> Option<&'static str> {
        self.session.read().is_load_failed().then_some(GAME_LOAD_ERROR)
    }

    /// Apply `action` to the board, if one is loaded
    pub fn update<R>(&self, action: impl FnOnce(&mut PuzzleBoard) -> R) -> Option<R> {
        let mut session = self.session;
        session.with_mut(|session| session.update_board(action))
    }

    pub fn select_word(&self, word: &str) {
        self.update(|board| board.select_word(word));
    }

    pub fn unselect_word(&self, word: &str) {
        self.update(|board| board.unselect_word(word));
    }

    pub fn clear_selected_words(&self) {
        self.update(PuzzleBoard::clear_selected_words);
    }

    pub fn submit_words(&self) -> SubmitOutcome {
        self.update(PuzzleBoard::submit_words)
            .unwrap_or(SubmitOutcome::NotReady)
    }

    pub fn get_hint(&self) {
        self.update(PuzzleBoard::get_hint);
    }

    pub fn reveal_solution(&self) {
        self.update(PuzzleBoard::reveal_solution);
    }

    /// Advance the clock by a second while the board is in play
    pub fn tick(&self) {
        if self.session.peek().is_in_play() {
            let mut session = self.session;
            session.with_mut(PuzzleSession::tick);
        }
    }
}

/// Load the puzzle for `game_id` and lay out its board.
///
/// Reruns whenever `game_id` changes; the session then starts over and any
/// load still in flight for the previous id is dropped.
pub fn use_connections_game(game_id: GameId) -> ConnectionsGameState {
    let service = use_connections_service();
    let platform = use_platform();
    let initial_id = game_id.clone();
    let mut session = use_signal(move || PuzzleSession::new(initial_id));

    use_effect(use_reactive((&game_id,), move |(game_id,)| {
        if session.with_mut(|s| s.show(game_id.clone())) {
            tracing::debug!(%game_id, "Switched puzzle");
        }
        spawn(load_puzzle(
            service.clone(),
            platform.clone(),
            session,
            game_id,
        ));
    }));

    ConnectionsGameState { session }
}

/// Fetch one puzzle (waiting out generation) into `session`
async fn load_puzzle(
    service: Arc<ConnectionsService>,
    platform: Platform,
    mut session: Signal<PuzzleSession>,
    game_id: GameId,
) {
    let sleeper = platform.clone();
    match service
        .load_game(&game_id, move |ms| sleeper.sleep_ms(ms))
        .await
    {
        Ok(game) => {
            session.with_mut(|s| s.game_loaded(&game_id, &game, &mut || platform.random_f64()));
        }
        Err(e) => {
            tracing::error!(
                operation = "load_game",
                %game_id,
                error = %e,
                "{}",
                GAME_LOAD_ERROR
            );
            session.with_mut(|s| s.load_failed(&game_id));
        }
    }
}

/// Signals behind the game dropdown
#[derive(Clone, Copy)]
pub struct GameIdsState {
    pub game_ids: Signal<Vec<GameId>>,
    pub is_loading: Signal<bool>,
    pub error_message: Signal<Option<String>>,
}

/// Fetch the published puzzle ids once on mount
pub fn use_game_ids() -> GameIdsState {
    let service = use_connections_service();
    let mut game_ids = use_signal(Vec::new);
    let mut is_loading = use_signal(|| true);
    let mut error_message = use_signal(|| None::<String>);

    use_future(move || {
        let service = service.clone();
        async move {
            match service.list_game_ids().await {
                Ok(ids) => game_ids.set(ids),
                Err(e) => {
                    tracing::error!(operation = "list_game_ids", error = %e, "{}", GAME_IDS_LOAD_ERROR);
                    error_message.set(Some(GAME_IDS_LOAD_ERROR.to_string()));
                }
            }
            is_loading.set(false);
        }
    });

    GameIdsState {
        game_ids,
        is_loading,
        error_message,
    }
}
