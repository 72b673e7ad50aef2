//! Test-only helpers for services and adapters.

pub mod fixtures;
