//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod platform_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiResponse};
pub use platform::{DocumentProvider, RandomProvider, SleepProvider, TimeProvider};
pub use platform_port::PlatformPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
pub use raw_api_port::RawApiPort;
