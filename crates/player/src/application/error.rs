//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The HTTP call failed or returned an unexpected body
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The puzzle was still being generated after every poll
    #[error("Game is still being generated after {attempts} attempts")]
    Generating { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_api_errors() {
        let err: ServiceError = ApiError::Timeout(35_000).into();
        assert_eq!(err.to_string(), "Request timed out after 35000 ms");
    }
}
