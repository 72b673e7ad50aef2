//! Entities mirrored from the remote game APIs

mod connections;
mod cyoa;

pub use connections::{Category, ConnectionsGame, GameIdsResponse, SolvedCategory};
pub use cyoa::{CyoaGame, CyoaGameSummary, CyoaOption, InventoryItem, Narrative};
