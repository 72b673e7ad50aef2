//! Story session aggregate - Client-side progress through one CYOA game
//!
//! The session sequences the fetches a play view needs: the game
//! descriptor, then its first narrative node, then one node per choice.
//! The fetching itself happens elsewhere; callers report each outcome back
//! and the session decides what the view shows.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the transition methods
//! - **Outcomes as values**: transitions that trigger a fetch return the id to fetch

use std::fmt;

use crate::entities::{CyoaGame, Narrative};
use crate::ids::{GameId, NarrativeId};

/// Why the story view is showing an error banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryError {
    /// The descriptor or the first node could not be fetched
    GameLoad,
    /// The node for a choice could not be fetched
    ChoiceLoad,
}

impl StoryError {
    /// Fixed text shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            StoryError::GameLoad => "Failed to load game. Please refresh the page to try again.",
            StoryError::ChoiceLoad => "Failed to load next story segment. Please try again.",
        }
    }
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What the Retry button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAction {
    /// Fetch the descriptor and first node again
    ReloadGame,
    /// Re-run a choice from the current node
    SelectChoice(usize),
}

/// Progress through one CYOA game
///
/// # Example
///
/// ```
/// use parlor_domain::aggregates::StorySession;
/// use parlor_domain::GameId;
///
/// let session = StorySession::new(GameId::new("game-1"));
/// assert!(session.is_loading());
/// assert!(session.game().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StorySession {
    game_id: GameId,
    game: Option<CyoaGame>,
    narrative: Option<Narrative>,
    narrative_id: Option<NarrativeId>,
    loading: bool,
    error: Option<StoryError>,
}

impl StorySession {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A session starts out loading its game.
    pub fn new(game_id: GameId) -> Self {
        Self {
            game_id,
            game: None,
            narrative: None,
            narrative_id: None,
            loading: true,
            error: None,
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
    pub fn game(&self) -> Option<&CyoaGame> {
        self.game.as_ref()
    }

    #[inline]
    pub fn narrative(&self) -> Option<&Narrative> {
        self.narrative.as_ref()
    }

    /// Id of the node currently displayed (or being loaded first)
    #[inline]
    pub fn narrative_id(&self) -> Option<&NarrativeId> {
        self.narrative_id.as_ref()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn error(&self) -> Option<StoryError> {
        self.error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|e| e.message())
    }

    /// An error with no game to fall back on: only the banner and Retry are shown
    pub fn is_fatal(&self) -> bool {
        self.error.is_some() && self.game.is_none()
    }

    /// What Retry should do from the current state
    pub fn retry_action(&self) -> RetryAction {
        if self.game.is_some() {
            RetryAction::SelectChoice(0)
        } else {
            RetryAction::ReloadGame
        }
    }

    // =========================================================================
    // Initial load
    // =========================================================================

    pub fn start_loading_game(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the descriptor; returns the id of the first node to fetch.
    pub fn game_loaded(&mut self, game: CyoaGame) -> NarrativeId {
        let initial = game.initial_narrative_id.clone();
        self.narrative_id = Some(initial.clone());
        self.game = Some(game);
        initial
    }

    pub fn initial_narrative_loaded(&mut self, narrative: Narrative) {
        self.narrative = Some(narrative);
        self.loading = false;
    }

    /// Either half of the initial load failed; nothing is kept.
    pub fn game_load_failed(&mut self) {
        self.error = Some(StoryError::GameLoad);
        self.game = None;
        self.narrative = None;
        self.loading = false;
    }

    // =========================================================================
    // Choices
    // =========================================================================

    /// Start following option `option_index`; returns the node id to fetch.
    ///
    /// Returns `None` (and changes nothing) while no node is displayed.
    pub fn begin_choice(&mut self, option_index: usize) -> Option<NarrativeId> {
        self.narrative.as_ref()?;
        let current = self.narrative_id.as_ref()?;
        let next = current.child(option_index);
        self.loading = true;
        self.error = None;
        Some(next)
    }

    pub fn choice_loaded(&mut self, next_id: NarrativeId, narrative: Narrative) {
        self.narrative = Some(narrative);
        self.narrative_id = Some(next_id);
        self.loading = false;
    }

    /// The previous node stays on screen under the error banner.
    pub fn choice_failed(&mut self) {
        self.error = Some(StoryError::ChoiceLoad);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CyoaOption;

    fn game() -> CyoaGame {
        CyoaGame {
            title: "Test Adventure".to_string(),
            description: "A test adventure".to_string(),
            image: None,
            resource_name: "Health".to_string(),
            resource_image: Some("health-icon.png".to_string()),
            starting_resource_value: 100,
            loss_resource_threshold: 0,
            initial_narrative_id: NarrativeId::new("start"),
        }
    }

    fn narrative(text: &str) -> Narrative {
        Narrative {
            chapter_title: "The Forest Crossroads".to_string(),
            narrative: text.to_string(),
            choice: "What do you do?".to_string(),
            options: vec![
                CyoaOption {
                    name: "Go left".to_string(),
                },
                CyoaOption {
                    name: "Go right".to_string(),
                },
            ],
            inventory: Vec::new(),
            current_resource_value: 100,
            image: None,
        }
    }

    fn loaded_session() -> StorySession {
        let mut session = StorySession::new(GameId::new("test-game"));
        session.start_loading_game();
        let first = session.game_loaded(game());
        assert_eq!(first.as_str(), "start");
        session.initial_narrative_loaded(narrative("You are at a crossroads."));
        session
    }

    #[test]
    fn new_session_is_loading_with_nothing_shown() {
        let session = StorySession::new(GameId::new("test-game"));
        assert!(session.is_loading());
        assert!(session.game().is_none());
        assert!(session.narrative().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_fatal());
    }

    #[test]
    fn initial_load_shows_first_node() {
        let session = loaded_session();
        assert!(!session.is_loading());
        assert_eq!(session.narrative_id().map(NarrativeId::as_str), Some("start"));
        assert_eq!(session.game().map(|g| g.title.as_str()), Some("Test Adventure"));
        assert!(session.narrative().is_some());
    }

    #[test]
    fn game_load_failure_is_fatal_and_clears_everything() {
        let mut session = StorySession::new(GameId::new("test-game"));
        session.game_loaded(game());
        session.game_load_failed();

        assert!(session.is_fatal());
        assert!(!session.is_loading());
        assert!(session.game().is_none());
        assert!(session.narrative().is_none());
        assert_eq!(
            session.error_message(),
            Some("Failed to load game. Please refresh the page to try again.")
        );
        assert_eq!(session.retry_action(), RetryAction::ReloadGame);
    }

    #[test]
    fn choice_derives_child_id_and_advances() {
        let mut session = loaded_session();

        let next = session.begin_choice(0).unwrap();
        assert_eq!(next.as_str(), "start-0");
        assert!(session.is_loading());

        session.choice_loaded(next, narrative("You went left."));
        assert!(!session.is_loading());
        assert_eq!(session.narrative_id().map(NarrativeId::as_str), Some("start-0"));

        let deeper = session.begin_choice(1).unwrap();
        assert_eq!(deeper.as_str(), "start-0-1");
    }

    #[test]
    fn choice_is_ignored_without_a_displayed_node() {
        let mut session = StorySession::new(GameId::new("test-game"));
        session.game_loaded(game());

        assert_eq!(session.begin_choice(0), None);
        assert!(session.is_loading());
    }

    #[test]
    fn choice_index_is_not_bounds_checked() {
        let mut session = loaded_session();
        assert_eq!(session.begin_choice(9).unwrap().as_str(), "start-9");
    }

    #[test]
    fn choice_failure_keeps_previous_node() {
        let mut session = loaded_session();
        session.begin_choice(1);
        session.choice_failed();

        assert!(!session.is_loading());
        assert!(!session.is_fatal());
        assert_eq!(session.narrative_id().map(NarrativeId::as_str), Some("start"));
        assert_eq!(
            session.narrative().map(|n| n.narrative.as_str()),
            Some("You are at a crossroads.")
        );
        assert_eq!(
            session.error_message(),
            Some("Failed to load next story segment. Please try again.")
        );
        assert_eq!(session.retry_action(), RetryAction::SelectChoice(0));
    }

    #[test]
    fn starting_a_choice_clears_previous_error() {
        let mut session = loaded_session();
        session.begin_choice(1);
        session.choice_failed();

        session.begin_choice(0);
        assert!(session.error().is_none());
    }

    #[test]
    fn reload_after_failure_clears_error() {
        let mut session = StorySession::new(GameId::new("test-game"));
        session.game_load_failed();
        session.start_loading_game();

        assert!(session.is_loading());
        assert!(session.error().is_none());
    }
}
