//! Application services - one per remote API

pub mod connections_service;
pub mod cyoa_service;

pub use connections_service::{
    ConnectionsService, PuzzleFetch, GENERATION_POLL_ATTEMPTS, GENERATION_POLL_INTERVAL_MS,
};
pub use cyoa_service::{CyoaService, StoryCell};
