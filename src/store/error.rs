use thiserror::Error;

use crate::domain::track::TrackId;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read track data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed track data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("track id {0} appears more than once")]
    DuplicateId(TrackId),

    #[error("track {id} has an empty {field}")]
    EmptyField { id: TrackId, field: &'static str },
}
