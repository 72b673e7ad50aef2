//! Aggregate roots - client-side game state that changes as the player acts
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns outcomes from mutations instead of performing I/O

pub mod puzzle_board;
pub mod puzzle_session;
pub mod story_session;

pub use puzzle_board::{PuzzleBoard, SubmitOutcome, WORDS_PER_GUESS};
pub use puzzle_session::PuzzleSession;
pub use story_session::{RetryAction, StoryError, StorySession};
