/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No row matched the requested id.
    #[error("repository.not_found")]
    NotFound,
    /// Connectivity, SQL or driver failure. Never inspected further.
    #[error("repository.database_error")]
    DatabaseError,
}
