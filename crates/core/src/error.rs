use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} requested without an id")]
    MissingId { entity: &'static str },

    #[error("Conflict: {0}")]
    Conflict(String),
}
