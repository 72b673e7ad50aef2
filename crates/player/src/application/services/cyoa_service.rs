//! CYOA Service - Read access to the story API
//!
//! The story tree lives on the server; this service fetches the game list,
//! a game's descriptor and individual narrative nodes, and sequences those
//! fetches for a [`StorySession`].

use parlor_domain::{
    CyoaGame, CyoaGameSummary, GameId, Narrative, NarrativeId, RetryAction, StorySession,
};

use crate::application::api::Api;
use crate::application::ServiceError;

/// Holder of the story session while its fetches are in flight
///
/// The UI keeps the session in a signal; tests hold it directly.
pub trait StoryCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut StorySession) -> R) -> R;
}

impl StoryCell for StorySession {
    fn update<R>(&mut self, f: impl FnOnce(&mut StorySession) -> R) -> R {
        f(self)
    }
}

/// Run `f` only while the cell still shows `game_id`
fn for_game<C: StoryCell, R>(
    cell: &mut C,
    game_id: &GameId,
    f: impl FnOnce(&mut StorySession) -> R,
) -> Option<R> {
    cell.update(|session| (session.game_id() == game_id).then(|| f(session)))
}

pub struct CyoaService {
    api: Api,
}

impl CyoaService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// List every playable game
    pub async fn list_games(&self) -> Result<Vec<CyoaGameSummary>, ServiceError> {
        Ok(self.api.get("/games").await?)
    }

    /// Get the descriptor of one game
    pub async fn get_game(&self, game_id: &GameId) -> Result<CyoaGame, ServiceError> {
        Ok(self.api.get(&format!("/games/{}", game_id)).await?)
    }

    /// Get one narrative node of a game
    pub async fn get_narrative(
        &self,
        game_id: &GameId,
        narrative_id: &NarrativeId,
    ) -> Result<Narrative, ServiceError> {
        Ok(self
            .api
            .get(&format!("/games/{}/narratives/{}", game_id, narrative_id))
            .await?)
    }

    // =========================================================================
    // Story sequencing
    // =========================================================================

    /// Fetch the descriptor, then its first node. Results that arrive after
    /// the cell moved on to another game are dropped.
    pub async fn start_story(&self, cell: &mut impl StoryCell) {
        let game_id = cell.update(|session| {
            session.start_loading_game();
            session.game_id().clone()
        });

        let game = match self.get_game(&game_id).await {
            Ok(game) => game,
            Err(e) => {
                tracing::error!(operation = "get_game", %game_id, error = %e, "Failed to load game");
                for_game(cell, &game_id, StorySession::game_load_failed);
                return;
            }
        };

        let Some(first) = for_game(cell, &game_id, |session| session.game_loaded(game)) else {
            return;
        };
        match self.get_narrative(&game_id, &first).await {
            Ok(narrative) => {
                for_game(cell, &game_id, |session| {
                    session.initial_narrative_loaded(narrative)
                });
            }
            Err(e) => {
                tracing::error!(
                    operation = "get_narrative",
                    %game_id,
                    narrative_id = %first,
                    error = %e,
                    "Failed to load initial narrative"
                );
                for_game(cell, &game_id, StorySession::game_load_failed);
            }
        }
    }

    /// Follow option `option_index` from the node on screen
    pub async fn choose(&self, cell: &mut impl StoryCell, option_index: usize) {
        let Some((game_id, next_id)) = cell.update(|session| {
            let next = session.begin_choice(option_index)?;
            Some((session.game_id().clone(), next))
        }) else {
            return;
        };

        match self.get_narrative(&game_id, &next_id).await {
            Ok(narrative) => {
                for_game(cell, &game_id, |session| {
                    session.choice_loaded(next_id, narrative)
                });
            }
            Err(e) => {
                tracing::error!(
                    operation = "select_choice",
                    %game_id,
                    narrative_id = %next_id,
                    error = %e,
                    "Failed to load next narrative"
                );
                for_game(cell, &game_id, StorySession::choice_failed);
            }
        }
    }

    /// Whatever Retry means from the current state
    pub async fn retry(&self, cell: &mut impl StoryCell) {
        match cell.update(|session| session.retry_action()) {
            RetryAction::ReloadGame => self.start_story(cell).await,
            RetryAction::SelectChoice(index) => self.choose(cell, index).await,
        }
    }
}
