//! Presentation layer - Dioxus UI components and state hooks

pub mod components;
pub mod services;
pub mod state;

pub use services::Services;
