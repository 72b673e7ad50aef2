//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn api_http_error(status: u16) -> ApiError {
    ApiError::HttpError {
        status,
        message: format!("status {status}"),
    }
}

/// `GET /games/{id}` body from the CYOA API
pub fn cyoa_game_json() -> Value {
    json!({
        "title": "Test Adventure",
        "description": "A test adventure",
        "image": "https://example.com/cover.png",
        "resourceName": "Health",
        "resourceImage": "health-icon.png",
        "startingResourceValue": 100,
        "lossResourceThreshold": 0,
        "initialNarrativeId": "start"
    })
}

/// `GET /games/{id}/narratives/{nid}` body from the CYOA API
pub fn narrative_json(text: &str) -> Value {
    json!({
        "chapterTitle": "The Forest Crossroads",
        "narrative": text,
        "choice": "What do you do?",
        "options": [{ "name": "Go left" }, { "name": "Go right" }],
        "inventory": [{ "name": "Lantern" }],
        "currentResourceValue": 90
    })
}

/// `GET /games/{id}` body from the Connections API
pub fn connections_game_json() -> Value {
    json!({
        "categories": {
            "Bodies of water": {
                "hint": "Places to swim",
                "words": ["LAKE", "POND", "RIVER", "SEA"]
            },
            "Kinds of tree": {
                "hint": "Found in a forest",
                "words": ["OAK", "ELM", "ASH", "PINE"]
            }
        }
    })
}
