//! Puzzle board aggregate - One play-through of a Connections puzzle
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the grid, selection and counters only change through methods
//! - **Injected randomness**: the shuffle draws from a caller-supplied source
//! - **Outcomes as values**: `submit_words()` returns what happened

use std::collections::BTreeMap;

use crate::entities::{Category, ConnectionsGame, SolvedCategory};
use crate::value_objects::random_index;

/// Number of words that make up a guess
pub const WORDS_PER_GUESS: usize = 4;

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than four words were selected; nothing was counted
    NotReady,
    /// The selection matched an unsolved category
    Solved { description: String },
    /// The selection matched nothing; counted as an incorrect guess
    Incorrect { one_away: bool },
}

impl SubmitOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Solved { .. })
    }
}

/// Board state for one puzzle
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use parlor_domain::aggregates::PuzzleBoard;
/// use parlor_domain::{Category, ConnectionsGame};
///
/// let mut categories = BTreeMap::new();
/// categories.insert(
///     "Bodies of water".to_string(),
///     Category {
///         hint: "Places to swim".to_string(),
///         words: vec!["LAKE".into(), "POND".into(), "RIVER".into(), "SEA".into()],
///     },
/// );
/// let game = ConnectionsGame { categories };
///
/// let mut board = PuzzleBoard::new(&game, &mut || 0.0);
/// for word in ["LAKE", "POND", "RIVER", "SEA"] {
///     board.select_word(word);
/// }
/// assert!(board.submit_words().is_correct());
/// assert!(board.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleBoard {
    categories: BTreeMap<String, Category>,
    words: Vec<String>,
    selected_words: Vec<String>,
    solved_categories: Vec<SolvedCategory>,
    incorrect_guesses: u32,
    hinted: Vec<String>,
    one_away: bool,
}

impl PuzzleBoard {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Lay out every word of `game` in a shuffled grid.
    ///
    /// `random` must yield values in `[0, 1)`.
    pub fn new(game: &ConnectionsGame, random: &mut impl FnMut() -> f64) -> Self {
        let mut words: Vec<String> = game
            .categories
            .values()
            .flat_map(|category| category.words.iter().cloned())
            .collect();
        shuffle(&mut words, random);

        Self {
            categories: game.categories.clone(),
            words,
            selected_words: Vec::new(),
            solved_categories: Vec::new(),
            incorrect_guesses: 0,
            hinted: Vec::new(),
            one_away: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Words still on the grid, in display order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Selected words, in the order they were picked
    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected_words.iter().any(|w| w == word)
    }

    /// Solved categories, in the order they were solved
    pub fn solved_categories(&self) -> &[SolvedCategory] {
        &self.solved_categories
    }

    #[inline]
    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    /// Hint texts in the order they were given
    pub fn hints(&self) -> Vec<&str> {
        self.hinted
            .iter()
            .filter_map(|description| self.categories.get(description))
            .map(|category| category.hint.as_str())
            .collect()
    }

    #[inline]
    pub fn hints_used(&self) -> usize {
        self.hinted.len()
    }

    #[inline]
    pub fn categories_count(&self) -> usize {
        self.categories.len()
    }

    /// Category descriptions in board order
    pub fn category_descriptions(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[inline]
    pub fn is_one_away(&self) -> bool {
        self.one_away
    }

    /// Some unsolved category has not had its hint shown yet
    pub fn is_hint_available(&self) -> bool {
        self.next_unhinted().is_some()
    }

    /// Some category is still unsolved
    pub fn is_reveal_solution_available(&self) -> bool {
        self.unsolved().next().is_some()
    }

    /// Every category is solved. A board with no categories is never complete.
    pub fn is_complete(&self) -> bool {
        !self.categories.is_empty() && self.solved_categories.len() == self.categories.len()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Add a word to the selection.
    ///
    /// Ignored when the word is not on the grid, already selected, or the
    /// selection is full.
    pub fn select_word(&mut self, word: &str) {
        if self.selected_words.len() >= WORDS_PER_GUESS
            || self.is_selected(word)
            || !self.words.iter().any(|w| w == word)
        {
            return;
        }
        self.selected_words.push(word.to_string());
    }

    pub fn unselect_word(&mut self, word: &str) {
        self.selected_words.retain(|w| w != word);
    }

    pub fn clear_selected_words(&mut self) {
        self.selected_words.clear();
    }

    // =========================================================================
    // Guessing
    // =========================================================================

    /// Check the current selection against the unsolved categories.
    pub fn submit_words(&mut self) -> SubmitOutcome {
        if self.selected_words.len() != WORDS_PER_GUESS {
            return SubmitOutcome::NotReady;
        }

        let matched = self
            .unsolved()
            .find(|(_, category)| {
                self.selected_words
                    .iter()
                    .all(|word| category.words.contains(word))
            })
            .map(|(description, _)| description.to_string());

        if let Some(description) = matched {
            self.solve(&description);
            return SubmitOutcome::Solved { description };
        }

        self.incorrect_guesses = self.incorrect_guesses.saturating_add(1);
        let one_away = self.unsolved().any(|(_, category)| {
            self.selected_words
                .iter()
                .filter(|word| category.words.contains(*word))
                .count()
                == WORDS_PER_GUESS - 1
        });
        self.one_away = one_away;
        SubmitOutcome::Incorrect {
            one_away: self.one_away,
        }
    }

    // =========================================================================
    // Help
    // =========================================================================

    /// Show the hint of the next unsolved, unhinted category.
    ///
    /// Returns the hint text, or `None` when no hint is left.
    pub fn get_hint(&mut self) -> Option<String> {
        let description = self.next_unhinted()?.to_string();
        let hint = self.categories.get(&description)?.hint.clone();
        self.hinted.push(description);
        Some(hint)
    }

    /// Solve one category for the player, preferring one whose hint is shown.
    ///
    /// Returns the revealed description, or `None` when everything is solved.
    pub fn reveal_solution(&mut self) -> Option<String> {
        let hinted_unsolved = self
            .hinted
            .iter()
            .find(|description| !self.is_solved(description))
            .cloned();
        let description = match hinted_unsolved {
            Some(description) => description,
            None => self.unsolved().next()?.0.to_string(),
        };
        self.solve(&description);
        Some(description)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn is_solved(&self, description: &str) -> bool {
        self.solved_categories
            .iter()
            .any(|solved| solved.description == description)
    }

    fn unsolved(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .filter(move |(description, _)| !self.is_solved(description))
            .map(|(description, category)| (description.as_str(), category))
    }

    fn next_unhinted(&self) -> Option<&str> {
        self.unsolved()
            .map(|(description, _)| description)
            .find(|description| !self.hinted.iter().any(|h| h.as_str() == *description))
    }

    fn solve(&mut self, description: &str) {
        let Some(category) = self.categories.get(description) else {
            return;
        };
        let words = category.words.clone();
        self.words.retain(|word| !words.contains(word));
        self.solved_categories.push(SolvedCategory {
            description: description.to_string(),
            words,
        });
        self.selected_words.clear();
        self.one_away = false;
    }
}

/// Fisher-Yates shuffle driven by `[0, 1)` samples
fn shuffle(words: &mut [String], random: &mut impl FnMut() -> f64) {
    for i in (1..words.len()).rev() {
        let j = random_index(random(), i + 1);
        words.swap(i, j);
    }
}
