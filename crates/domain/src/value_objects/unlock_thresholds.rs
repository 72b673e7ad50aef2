//! Hint and solution unlock thresholds
//!
//! Help in the puzzle view opens once the player has either guessed wrong
//! often enough or spent long enough on the board. Both counters start at
//! zero for every game.
//!
//! # Tier Classification
//!
//! - **Tier 4: Simple Data Struct** - plain thresholds, any values allowed

use serde::{Deserialize, Serialize};

/// Thresholds after which the hint and solution actions are offered
///
/// # Examples
///
/// ```
/// use parlor_domain::value_objects::UnlockThresholds;
///
/// let thresholds = UnlockThresholds::default();
///
/// // Two wrong guesses open the hint...
/// assert!(thresholds.is_hint_enabled(true, 2, 0));
/// // ...but only while a hint is left to give.
/// assert!(!thresholds.is_hint_enabled(false, 2, 0));
///
/// // Three minutes on the board open the solution.
/// assert!(thresholds.is_solution_enabled(true, 0, 180));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockThresholds {
    pub incorrect_guesses_until_hint: u32,
    pub incorrect_guesses_until_solution: u32,
    pub seconds_until_hint: u64,
    pub seconds_until_solution: u64,
}

impl UnlockThresholds {
    pub const DEFAULT_INCORRECT_GUESSES_UNTIL_HINT: u32 = 2;
    pub const DEFAULT_INCORRECT_GUESSES_UNTIL_SOLUTION: u32 = 4;
    pub const DEFAULT_SECONDS_UNTIL_HINT: u64 = 60;
    pub const DEFAULT_SECONDS_UNTIL_SOLUTION: u64 = 180;

    /// Whether the "Get hint" action should be offered right now
    pub fn is_hint_enabled(&self, hint_available: bool, incorrect_guesses: u32, elapsed_seconds: u64) -> bool {
        hint_available
            && (incorrect_guesses >= self.incorrect_guesses_until_hint
                || elapsed_seconds >= self.seconds_until_hint)
    }

    /// Whether the "Reveal solution" action should be offered right now
    pub fn is_solution_enabled(
        &self,
        solution_available: bool,
        incorrect_guesses: u32,
        elapsed_seconds: u64,
    ) -> bool {
        solution_available
            && (incorrect_guesses >= self.incorrect_guesses_until_solution
                || elapsed_seconds >= self.seconds_until_solution)
    }
}

impl Default for UnlockThresholds {
    fn default() -> Self {
        Self {
            incorrect_guesses_until_hint: Self::DEFAULT_INCORRECT_GUESSES_UNTIL_HINT,
            incorrect_guesses_until_solution: Self::DEFAULT_INCORRECT_GUESSES_UNTIL_SOLUTION,
            seconds_until_hint: Self::DEFAULT_SECONDS_UNTIL_HINT,
            seconds_until_solution: Self::DEFAULT_SECONDS_UNTIL_SOLUTION,
        }
    }
}
