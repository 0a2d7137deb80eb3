use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to read seed file {path}: {source} {location}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to parse seed file {path}: {source} {location}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn seed_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SeedIo {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn seed_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SeedParse {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
