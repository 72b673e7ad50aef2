//! Value objects for the puzzle and story views

mod elapsed_clock;
mod game_colors;
mod unlock_thresholds;

pub use elapsed_clock::ElapsedClock;
pub use game_colors::{CategoryPalette, GameColor, GAME_COLORS};
pub(crate) use game_colors::random_index;
pub use unlock_thresholds::UnlockThresholds;
