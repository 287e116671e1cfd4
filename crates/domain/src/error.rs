//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClienteleError`] via `From`.

/// Top-level error for clientele operations.
#[derive(Debug, thiserror::Error)]
pub enum ClienteleError {
    /// A record broke one of its invariants.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A record with the same natural key already exists.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// The storage backend failed; the outcome of the operation is unknown.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on a [`Customer`](crate::customer::Customer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("account number must not be empty")]
    EmptyAccountNumber,

    #[error("name must not be empty")]
    EmptyName,

    #[error("credit limit must not be negative")]
    NegativeCreditLimit,
}

/// Lookup miss for a record identified by its natural key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

/// Attempt to create a record whose natural key is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_clientele_error() {
        let err: ClienteleError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            ClienteleError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_not_found_with_entity_and_key() {
        let err = NotFoundError {
            entity: "Customer",
            key: "ACC001".to_string(),
        };
        assert_eq!(err.to_string(), "Customer ACC001 not found");
    }

    #[test]
    fn should_render_conflict_with_entity_and_key() {
        let err = ConflictError {
            entity: "Customer",
            key: "ACC001".to_string(),
        };
        assert_eq!(err.to_string(), "Customer ACC001 already exists");
    }

    #[test]
    fn should_keep_storage_source_when_wrapping() {
        let io = std::io::Error::other("disk gone");
        let err = ClienteleError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk gone");
    }
}
