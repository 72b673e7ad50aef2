//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use `use_context` to access services without depending
//! on infrastructure implementations.
use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ConnectionsService, CyoaService};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub cyoa: Arc<CyoaService>,
    pub connections: Arc<ConnectionsService>,
}

impl Services {
    /// Create all services, one typed API per remote service
    pub fn new(cyoa_api: Api, connections_api: Api) -> Self {
        Self {
            cyoa: Arc::new(CyoaService::new(cyoa_api)),
            connections: Arc::new(ConnectionsService::new(connections_api)),
        }
    }
}

/// Hook to access the CyoaService from context
pub fn use_cyoa_service() -> Arc<CyoaService> {
    let services = use_context::<Services>();
    services.cyoa.clone()
}

/// Hook to access the ConnectionsService from context
pub fn use_connections_service() -> Arc<ConnectionsService> {
    let services = use_context::<Services>();
    services.connections.clone()
}
