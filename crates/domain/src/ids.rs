use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        stringify!($name),
                        " cannot be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(GameId);
define_id!(NarrativeId);

impl NarrativeId {
    /// Identifier of the node reached by picking `option_index` from this node.
    ///
    /// The option index is not checked against the node's option list; the
    /// remote service owns the story tree.
    pub fn child(&self, option_index: usize) -> NarrativeId {
        NarrativeId(format!("{}-{}", self.0, option_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_appends_option_index_with_hyphen() {
        let start = NarrativeId::new("start");
        assert_eq!(start.child(0).as_str(), "start-0");
        assert_eq!(start.child(2).child(1).as_str(), "start-2-1");
    }

    #[test]
    fn child_does_not_bounds_check() {
        let node = NarrativeId::new("start-1");
        assert_eq!(node.child(42).as_str(), "start-1-42");
    }

    #[test]
    fn from_str_trims_and_rejects_empty() {
        let id: GameId = " 2025-01-15 ".parse().expect("valid id");
        assert_eq!(id.as_str(), "2025-01-15");

        let err = "   ".parse::<GameId>().unwrap_err();
        assert_eq!(err, DomainError::invalid_id("GameId cannot be empty"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = GameId::new("game-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"game-1\"");
        let back: GameId = serde_json::from_str("\"game-1\"").unwrap();
        assert_eq!(back, id);
    }
}
