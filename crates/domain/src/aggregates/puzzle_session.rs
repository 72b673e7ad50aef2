//! Puzzle session aggregate - Everything the puzzle view holds for one game id
//!
//! Wraps the board together with the transient state around it (colours,
//! elapsed clock, load status). Showing a different game id starts the whole
//! session over, and load results for any other id are dropped.

use crate::aggregates::PuzzleBoard;
use crate::entities::ConnectionsGame;
use crate::ids::GameId;
use crate::value_objects::{CategoryPalette, ElapsedClock};

/// Puzzle view state for the game currently shown
///
/// # Example
///
/// ```
/// use parlor_domain::aggregates::PuzzleSession;
/// use parlor_domain::{ConnectionsGame, GameId};
///
/// let mut session = PuzzleSession::new(GameId::new("2025-01-15"));
/// assert!(session.is_loading());
///
/// assert!(session.show(GameId::new("2025-01-16")));
/// assert!(!session.game_loaded(&GameId::new("2025-01-15"), &ConnectionsGame::default(), &mut || 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleSession {
    game_id: GameId,
    board: Option<PuzzleBoard>,
    palette: CategoryPalette,
    clock: ElapsedClock,
    loading: bool,
    load_failed: bool,
}

impl PuzzleSession {
    /// A session starts out loading its game.
    pub fn new(game_id: GameId) -> Self {
        Self {
            game_id,
            board: None,
            palette: CategoryPalette::default(),
            clock: ElapsedClock::new(),
            loading: true,
            load_failed: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    #[inline]
    pub fn board(&self) -> Option<&PuzzleBoard> {
        self.board.as_ref()
    }

    #[inline]
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    #[inline]
    pub fn clock(&self) -> ElapsedClock {
        self.clock
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn is_load_failed(&self) -> bool {
        self.load_failed
    }

    /// A board is loaded and still has unsolved categories
    pub fn is_in_play(&self) -> bool {
        self.board.as_ref().is_some_and(|board| !board.is_complete())
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Switch to `game_id`. Returns `true` when it differs from the id shown,
    /// in which case board, colours, clock and load status start over.
    pub fn show(&mut self, game_id: GameId) -> bool {
        if self.game_id == game_id {
            return false;
        }
        *self = Self::new(game_id);
        true
    }

    /// Lay out the board for `game_id`; ignored (returns `false`) when
    /// another game is shown by now.
    pub fn game_loaded(
        &mut self,
        game_id: &GameId,
        game: &ConnectionsGame,
        random: &mut impl FnMut() -> f64,
    ) -> bool {
        if &self.game_id != game_id {
            return false;
        }
        let board = PuzzleBoard::new(game, random);
        self.palette = CategoryPalette::assign(board.category_descriptions(), random);
        self.board = Some(board);
        self.clock.reset();
        self.loading = false;
        self.load_failed = false;
        true
    }

    /// Record a failed load for `game_id`; ignored when stale.
    pub fn load_failed(&mut self, game_id: &GameId) -> bool {
        if &self.game_id != game_id {
            return false;
        }
        self.board = None;
        self.loading = false;
        self.load_failed = true;
        true
    }

    /// One second of play; the clock stands still unless the board is in play.
    pub fn tick(&mut self) {
        if self.is_in_play() {
            self.clock.tick();
        }
    }

    /// Apply `action` to the board, if one is loaded
    pub fn update_board<R>(&mut self, action: impl FnOnce(&mut PuzzleBoard) -> R) -> Option<R> {
        self.board.as_mut().map(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::SubmitOutcome;
    use crate::entities::Category;
    use std::collections::BTreeMap;

    fn game() -> ConnectionsGame {
        let mut categories = BTreeMap::new();
        categories.insert(
            "Bodies of water".to_string(),
            Category {
                hint: "Places to swim".to_string(),
                words: vec!["LAKE".into(), "POND".into(), "RIVER".into(), "SEA".into()],
            },
        );
        categories.insert(
            "Kinds of tree".to_string(),
            Category {
                hint: "Found in a forest".to_string(),
                words: vec!["OAK".into(), "ELM".into(), "ASH".into(), "PINE".into()],
            },
        );
        ConnectionsGame { categories }
    }

    fn played_session(id: &str) -> PuzzleSession {
        let id = GameId::new(id);
        let mut session = PuzzleSession::new(id.clone());
        assert!(session.game_loaded(&id, &game(), &mut || 0.0));
        for _ in 0..75 {
            session.tick();
        }
        session.update_board(|board| {
            for word in ["LAKE", "POND", "OAK", "ELM"] {
                board.select_word(word);
            }
            board.submit_words();
            board.get_hint();
        });
        session
    }

    #[test]
    fn new_session_is_loading() {
        let session = PuzzleSession::new(GameId::new("2025-01-15"));
        assert!(session.is_loading());
        assert!(session.board().is_none());
        assert!(!session.is_load_failed());
        assert_eq!(session.clock().seconds(), 0);
    }

    #[test]
    fn load_lays_out_board_and_colours() {
        let session = played_session("2025-01-15");
        let board = session.board().unwrap();

        assert!(!session.is_loading());
        assert_eq!(board.categories_count(), 2);
        assert_ne!(
            session.palette().category("Bodies of water"),
            session.palette().category("Kinds of tree")
        );
    }

    #[test]
    fn showing_same_id_keeps_progress() {
        let mut session = played_session("2025-01-15");

        assert!(!session.show(GameId::new("2025-01-15")));
        assert_eq!(session.clock().seconds(), 75);
        assert_eq!(session.board().unwrap().incorrect_guesses(), 1);
    }

    #[test]
    fn changing_game_id_starts_everything_over() {
        let mut session = played_session("2025-01-15");

        assert!(session.show(GameId::new("2025-01-16")));

        assert_eq!(session.game_id().as_str(), "2025-01-16");
        assert!(session.is_loading());
        assert!(session.board().is_none());
        assert_eq!(session.clock().seconds(), 0);

        let id = GameId::new("2025-01-16");
        session.game_loaded(&id, &game(), &mut || 0.0);
        let board = session.board().unwrap();
        assert_eq!(board.incorrect_guesses(), 0);
        assert_eq!(board.hints_used(), 0);
        assert!(board.selected_words().is_empty());
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut session = PuzzleSession::new(GameId::new("2025-01-15"));
        session.show(GameId::new("2025-01-16"));

        assert!(!session.game_loaded(&GameId::new("2025-01-15"), &game(), &mut || 0.0));
        assert!(!session.load_failed(&GameId::new("2025-01-15")));
        assert!(session.is_loading());
        assert!(session.board().is_none());
    }

    #[test]
    fn failed_load_stops_loading() {
        let id = GameId::new("2025-01-15");
        let mut session = PuzzleSession::new(id.clone());

        assert!(session.load_failed(&id));
        assert!(session.is_load_failed());
        assert!(!session.is_loading());
    }

    #[test]
    fn clock_only_runs_while_in_play() {
        let id = GameId::new("2025-01-15");
        let mut session = PuzzleSession::new(id.clone());
        session.tick();
        assert_eq!(session.clock().seconds(), 0);

        session.game_loaded(&id, &game(), &mut || 0.0);
        session.tick();
        assert_eq!(session.clock().seconds(), 1);

        session.update_board(|board| {
            board.reveal_solution();
            board.reveal_solution();
        });
        assert!(session.board().unwrap().is_complete());
        session.tick();
        assert_eq!(session.clock().seconds(), 1);
    }

    #[test]
    fn update_board_is_none_before_load() {
        let mut session = PuzzleSession::new(GameId::new("2025-01-15"));
        assert_eq!(session.update_board(|board| board.submit_words()), None);

        let mut played = played_session("2025-01-15");
        played.update_board(PuzzleBoard::clear_selected_words);
        assert_eq!(
            played.update_board(|board| board.submit_words()),
            Some(SubmitOutcome::NotReady)
        );
    }
}
