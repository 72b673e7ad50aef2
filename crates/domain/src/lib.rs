//! Parlor domain: game payloads, identifiers and the client-side state
//! machines behind the story and puzzle views.
//!
//! Nothing in this crate performs I/O. Randomness and the current time are
//! passed in by the caller.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_date;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    PuzzleBoard, PuzzleSession, RetryAction, StoryError, StorySession, SubmitOutcome,
};
pub use entities::{
    Category, ConnectionsGame, CyoaGame, CyoaGameSummary, CyoaOption, GameIdsResponse,
    InventoryItem, Narrative, SolvedCategory,
};
pub use error::DomainError;
pub use game_date::{long_date_label, parse_game_date, short_date_label, today_game_id};
pub use ids::{GameId, NarrativeId};
pub use value_objects::{CategoryPalette, ElapsedClock, GameColor, UnlockThresholds, GAME_COLORS};
