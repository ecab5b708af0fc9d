/// Every rule an item broke, in the order the rules are checked.
///
/// Displays as the violations joined with `", "` so callers can report all of
/// them at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .violations.join(", "))]
pub struct ItemValidationError {
    pub violations: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.invalid_input: {0}")]
    InvalidInput(String),
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ItemError {
    pub fn invalid_id(id: i64) -> Self {
        ItemError::InvalidInput(format!("id must be a positive integer, got {id}"))
    }
}

impl From<ItemValidationError> for ItemError {
    fn from(err: ItemValidationError) -> Self {
        ItemError::InvalidInput(err.to_string())
    }
}
