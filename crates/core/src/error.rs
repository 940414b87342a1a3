use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A polymorphic record whose concrete type has no entry in the
    /// type-to-route mapping it is being linked through.
    #[error("Unsupported {base} type: {type_tag}")]
    UnsupportedType {
        base: &'static str,
        type_tag: String,
    },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("The following settings have not been set: {}", .0.join(", "))]
    MissingSettings(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}
