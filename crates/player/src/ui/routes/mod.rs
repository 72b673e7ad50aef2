//! Application routes

use dioxus::prelude::*;

mod connections_routes;
mod cyoa_routes;

pub use connections_routes::{ConnectionsRoute, TodayPuzzleRoute};
pub use cyoa_routes::{GameBrowserRoute, StoryRoute};

/// Page title of the story screens
pub const CYOA_PAGE_TITLE: &str = "Choose Your Own Adventure";

/// Page title of the puzzle screens
pub const CONNECTIONS_PAGE_TITLE: &str = "Connections";

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    GameBrowserRoute {},
    #[route("/story/:game_id")]
    StoryRoute { game_id: String },
    #[route("/connections")]
    TodayPuzzleRoute {},
    #[route("/g/:game_id")]
    ConnectionsRoute { game_id: String },
}

impl Route {
    pub fn story(game_id: impl ToString) -> Self {
        Route::StoryRoute {
            game_id: game_id.to_string(),
        }
    }

    pub fn puzzle(game_id: impl ToString) -> Self {
        Route::ConnectionsRoute {
            game_id: game_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::GameBrowserRoute {}.to_string(), "/");
        assert_eq!(Route::story("game-1").to_string(), "/story/game-1");
        assert_eq!(Route::TodayPuzzleRoute {}.to_string(), "/connections");
        assert_eq!(Route::puzzle("2025-01-15").to_string(), "/g/2025-01-15");
    }

    #[test]
    fn paths_parse_into_routes() {
        let route: Route = "/g/2025-01-15".parse().unwrap();
        assert_eq!(route, Route::puzzle("2025-01-15"));

        let route: Route = "/story/game-1".parse().unwrap();
        assert_eq!(route, Route::story("game-1"));
    }
}
