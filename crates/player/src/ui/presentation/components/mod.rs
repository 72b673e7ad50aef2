//! UI components

pub mod choice_handler;
pub mod connections_game;
pub mod game_browser;
pub mod game_selection;
pub mod inventory_display;
pub mod narrative_display;
pub mod story_engine;

pub use choice_handler::ChoiceHandler;
pub use connections_game::ConnectionsGame;
pub use game_browser::GameBrowser;
pub use game_selection::GameSelection;
pub use inventory_display::InventoryDisplay;
pub use narrative_display::NarrativeDisplay;
pub use story_engine::StoryEngine;
