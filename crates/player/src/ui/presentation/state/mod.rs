//! State hooks - fetch on mount and expose signals to components

pub mod connections_state;
pub mod cyoa_state;

pub use connections_state::{
    use_connections_game, use_game_ids, ConnectionsGameState, GameIdsState, GAME_IDS_LOAD_ERROR,
    GAME_LOAD_ERROR,
};
pub use cyoa_state::{use_cyoa_games, CyoaGamesState, GAMES_LOAD_ERROR};
