use thiserror::Error;

use crate::domain::track::TrackId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("slug '{slug}' is used by both track {first_id} and track {second_id}")]
    DuplicateSlug {
        slug: String,
        first_id: TrackId,
        second_id: TrackId,
    },

    #[error("track {0} not found")]
    TrackNotFound(String),
}
