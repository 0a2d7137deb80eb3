use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category tag of an activity, used to filter the notification feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Card,
    Board,
    Comment,
    Member,
    #[default]
    Other,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Board => "board",
            Self::Comment => "comment",
            Self::Member => "member",
            Self::Other => "other",
        }
    }
}

impl FromStr for ActivityType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "card" => Ok(Self::Card),
            "board" => Ok(Self::Board),
            "comment" => Ok(Self::Comment),
            "member" => Ok(Self::Member),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidActivityType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
