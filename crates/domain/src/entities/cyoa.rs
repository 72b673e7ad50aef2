//! CYOA entities - Game descriptors and narrative nodes
//!
//! These mirror the JSON served by the CYOA API. The service owns the story
//! tree; the client only ever holds the descriptor of the game being played
//! and the node currently on screen.

use serde::{Deserialize, Serialize};

use crate::ids::{GameId, NarrativeId};

/// Descriptor of a single CYOA game
///
/// # Simple Data Struct
///
/// No invariants to protect: every combination of values the API sends is
/// accepted as-is, so all fields are public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyoaGame {
    pub title: String,
    pub description: String,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Name of the tracked resource (e.g. "Health")
    pub resource_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_image: Option<String>,
    #[serde(default)]
    pub starting_resource_value: i64,
    /// The story is lost once the resource falls to or below this value
    #[serde(default)]
    pub loss_resource_threshold: i64,
    pub initial_narrative_id: NarrativeId,
}

impl CyoaGame {
    /// Whether the player has run out of the game's resource at this node
    pub fn is_lost(&self, narrative: &Narrative) -> bool {
        narrative.current_resource_value <= self.loss_resource_threshold
    }
}

/// Element of the `GET /games` listing: a descriptor plus its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyoaGameSummary {
    pub game_id: GameId,
    #[serde(flatten)]
    pub game: CyoaGame,
}

/// A choice offered at a narrative node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyoaOption {
    pub name: String,
}

/// An item the player is carrying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One "page" of a CYOA story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(default)]
    pub chapter_title: String,
    /// Body text of the node
    pub narrative: String,
    /// Decision prompt shown above the options
    #[serde(default)]
    pub choice: String,
    #[serde(default)]
    pub options: Vec<CyoaOption>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub current_resource_value: i64,
    /// Scene image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Narrative {
    /// A node without options ends the story
    pub fn is_ending(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forest_crossroads() -> Narrative {
        Narrative {
            chapter_title: "The Forest Crossroads".to_string(),
            narrative: "You find yourself at a crossroads in the forest.".to_string(),
            choice: "What do you do?".to_string(),
            options: vec![
                CyoaOption {
                    name: "Go left".to_string(),
                },
                CyoaOption {
                    name: "Go right".to_string(),
                },
            ],
            inventory: vec![InventoryItem {
                name: "sword".to_string(),
                image: Some("sword.png".to_string()),
            }],
            current_resource_value: 100,
            image: Some("forest-crossroads.jpg".to_string()),
        }
    }

    #[test]
    fn game_summary_flattens_descriptor() {
        let value = json!({
            "description": "A thrilling adventure awaits",
            "gameId": "game-1",
            "image": "https://example.com/image1.jpg",
            "initialNarrativeId": "start",
            "lossResourceThreshold": 0,
            "resourceName": "Health",
            "resourceImage": "health-icon.png",
            "startingResourceValue": 100,
            "title": "Test Adventure 1"
        });

        let summary: CyoaGameSummary = serde_json::from_value(value).unwrap();
        assert_eq!(summary.game_id.as_str(), "game-1");
        assert_eq!(summary.game.title, "Test Adventure 1");
        assert_eq!(summary.game.initial_narrative_id.as_str(), "start");
        assert_eq!(summary.game.starting_resource_value, 100);
        assert_eq!(summary.game.image.as_deref(), Some("https://example.com/image1.jpg"));
    }

    #[test]
    fn game_descriptor_tolerates_missing_optional_fields() {
        let value = json!({
            "description": "A test adventure",
            "initialNarrativeId": "start",
            "resourceName": "Health",
            "title": "Test Adventure"
        });

        let game: CyoaGame = serde_json::from_value(value).unwrap();
        assert_eq!(game.image, None);
        assert_eq!(game.resource_image, None);
        assert_eq!(game.loss_resource_threshold, 0);
    }

    #[test]
    fn narrative_parses_inventory_and_options() {
        let value = json!({
            "chapterTitle": "The Forest Crossroads",
            "choice": "What do you do?",
            "currentResourceValue": 100,
            "image": "forest-crossroads.jpg",
            "inventory": [{ "image": "sword.png", "name": "sword" }],
            "narrative": "You find yourself at a crossroads in the forest.",
            "options": [{ "name": "Go left" }, { "name": "Go right" }]
        });

        let narrative: Narrative = serde_json::from_value(value).unwrap();
        assert_eq!(narrative, forest_crossroads());
        assert!(!narrative.is_ending());
    }

    #[test]
    fn narrative_without_options_is_an_ending() {
        let value = json!({ "narrative": "The end." });
        let narrative: Narrative = serde_json::from_value(value).unwrap();
        assert!(narrative.is_ending());
        assert!(narrative.inventory.is_empty());
    }

    #[test]
    fn game_is_lost_at_or_below_threshold() {
        let game = CyoaGame {
            title: "Test Adventure".to_string(),
            description: "A test adventure".to_string(),
            image: None,
            resource_name: "Health".to_string(),
            resource_image: None,
            starting_resource_value: 100,
            loss_resource_threshold: 0,
            initial_narrative_id: NarrativeId::new("start"),
        };
        let mut narrative = forest_crossroads();
        assert!(!game.is_lost(&narrative));

        narrative.current_resource_value = 0;
        assert!(game.is_lost(&narrative));

        narrative.current_resource_value = -5;
        assert!(game.is_lost(&narrative));
    }
}
