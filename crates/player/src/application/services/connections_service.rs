//! Connections Service - Read access to the daily puzzle API
//!
//! A puzzle that is still being generated answers `202 Accepted`; callers
//! that need the finished board use [`ConnectionsService::load_game`], which
//! polls until the puzzle is ready or the attempt budget runs out.

use std::future::Future;

use parlor_domain::{ConnectionsGame, GameId, GameIdsResponse};

use crate::application::api::{decode, Api};
use crate::application::ServiceError;

/// Delay between polls while a puzzle is being generated
pub const GENERATION_POLL_INTERVAL_MS: u64 = 5_000;

/// Number of fetches before giving up on a generating puzzle
pub const GENERATION_POLL_ATTEMPTS: u32 = 12;

/// Result of a single puzzle fetch
#[derive(Debug, Clone, PartialEq)]
pub enum PuzzleFetch {
    Ready(ConnectionsGame),
    /// The server accepted the request but the puzzle is not ready yet
    Generating,
}

pub struct ConnectionsService {
    api: Api,
}

impl ConnectionsService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch a puzzle once
    pub async fn get_game(&self, game_id: &GameId) -> Result<PuzzleFetch, ServiceError> {
        let response = self.api.get_response(&format!("/games/{}", game_id)).await?;
        if response.is_accepted() {
            return Ok(PuzzleFetch::Generating);
        }
        Ok(PuzzleFetch::Ready(decode(response.body)?))
    }

    /// Fetch a puzzle, waiting out generation.
    ///
    /// `sleep` is awaited between attempts with [`GENERATION_POLL_INTERVAL_MS`].
    pub async fn load_game<S, F>(
        &self,
        game_id: &GameId,
        mut sleep: S,
    ) -> Result<ConnectionsGame, ServiceError>
    where
        S: FnMut(u64) -> F,
        F: Future<Output = ()>,
    {
        for attempt in 1..=GENERATION_POLL_ATTEMPTS {
            match self.get_game(game_id).await? {
                PuzzleFetch::Ready(game) => return Ok(game),
                PuzzleFetch::Generating => {
                    tracing::info!(%game_id, attempt, "Puzzle is still being generated");
                    if attempt < GENERATION_POLL_ATTEMPTS {
                        sleep(GENERATION_POLL_INTERVAL_MS).await;
                    }
                }
            }
        }
        Err(ServiceError::Generating {
            attempts: GENERATION_POLL_ATTEMPTS,
        })
    }

    /// List the ids of every published puzzle
    pub async fn list_game_ids(&self) -> Result<Vec<GameId>, ServiceError> {
        let response: GameIdsResponse = self.api.get("/games").await?;
        Ok(response.game_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockSleepProvider;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::{ApiResponse, MockRawApiPort, SleepProvider};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn service(mock: MockRawApiPort) -> ConnectionsService {
        ConnectionsService::new(Api::new(Arc::new(mock)))
    }

    #[tokio::test]
    async fn get_game_returns_ready_puzzle() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/games/2025-01-15")
            .times(1)
            .returning(|_| Ok(ApiResponse::ok(fixtures::connections_game_json())));

        let fetch = service(mock)
            .get_game(&GameId::new("2025-01-15"))
            .await
            .unwrap();

        match fetch {
            PuzzleFetch::Ready(game) => {
                assert_eq!(game.categories.len(), 2);
                assert_eq!(game.categories["Kinds of tree"].hint, "Found in a forest");
            }
            PuzzleFetch::Generating => panic!("expected a ready puzzle"),
        }
    }

    #[tokio::test]
    async fn accepted_status_means_generating() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(ApiResponse::new(202, json!({ "categories": {} }))));

        let fetch = service(mock)
            .get_game(&GameId::new("2025-01-15"))
            .await
            .unwrap();

        assert_eq!(fetch, PuzzleFetch::Generating);
    }

    #[tokio::test]
    async fn load_game_polls_until_ready() {
        let mut calls = 0;
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().times(3).returning(move |_| {
            calls += 1;
            if calls < 3 {
                Ok(ApiResponse::new(202, Value::Null))
            } else {
                Ok(ApiResponse::ok(fixtures::connections_game_json()))
            }
        });
        let sleeper = MockSleepProvider::default();

        let game = service(mock)
            .load_game(&GameId::new("2025-01-15"), |ms| sleeper.sleep_ms(ms))
            .await
            .unwrap();

        assert_eq!(game.word_count(), 8);
        assert_eq!(
            sleeper.requested(),
            [GENERATION_POLL_INTERVAL_MS, GENERATION_POLL_INTERVAL_MS]
        );
    }

    #[tokio::test]
    async fn load_game_gives_up_after_attempt_budget() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .times(GENERATION_POLL_ATTEMPTS as usize)
            .returning(|_| Ok(ApiResponse::new(202, Value::Null)));
        let sleeper = MockSleepProvider::default();

        let err = service(mock)
            .load_game(&GameId::new("2025-01-15"), |ms| sleeper.sleep_ms(ms))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Generating {
                attempts: GENERATION_POLL_ATTEMPTS
            }
        );
        assert_eq!(
            sleeper.requested().len(),
            GENERATION_POLL_ATTEMPTS as usize - 1
        );
    }

    #[tokio::test]
    async fn load_game_stops_on_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .times(1)
            .returning(|_| Err(fixtures::api_request_failed("connection refused")));
        let sleeper = MockSleepProvider::default();

        let err = service(mock)
            .load_game(&GameId::new("2025-01-15"), |ms| sleeper.sleep_ms(ms))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Api(fixtures::api_request_failed("connection refused"))
        );
        assert!(sleeper.requested().is_empty());
    }

    #[tokio::test]
    async fn list_game_ids_unwraps_response() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/games")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::ok(
                    json!({ "gameIds": ["2025-01-14", "2025-01-15"] }),
                ))
            });

        let ids = service(mock).list_game_ids().await.unwrap();

        assert_eq!(ids, [GameId::new("2025-01-14"), GameId::new("2025-01-15")]);
    }
}
