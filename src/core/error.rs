//! StoreError - Error taxonomy of the data-access layer
//!
//! Store failures are never swallowed: they are classified once, here, and the
//! underlying `sqlx::Error` stays reachable through `source()`.

use sqlx::error::ErrorKind;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Lookup by identifier matched zero rows where exactly one was required
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Partial update named a field that the entity does not persist
    #[error("{entity} has no assignable field `{field}`")]
    UnknownField { entity: &'static str, field: String },

    /// Value assigned to a field does not match the field's kind or nullability
    #[error("{entity}.{field} expects {expected}, got {found}")]
    FieldType {
        entity: &'static str,
        field: String,
        expected: String,
        found: &'static str,
    },

    /// Uniqueness, foreign-key, not-null or check constraint rejected by the store
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] sqlx::Error),

    /// Connection could not be established or was lost mid-operation
    #[error("connectivity failure: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// Any other failure reported by the store (malformed query, decode error, ...)
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn unknown_field(entity: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            entity,
            field: field.into(),
        }
    }

    pub fn field_type(
        entity: &'static str,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: &'static str,
    ) -> Self {
        Self::FieldType {
            entity,
            field: field.into(),
            expected: expected.into(),
            found,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(err),
                _ => Self::Database(err),
            },

            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connectivity(err),

            sqlx::Error::Configuration(e) => Self::Config(e.to_string()),

            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn pool_failures_are_connectivity() {
        assert!(StoreError::from(sqlx::Error::PoolTimedOut).is_connectivity());
        assert!(StoreError::from(sqlx::Error::PoolClosed).is_connectivity());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = StoreError::from(sqlx::Error::Io(io));
        assert!(err.is_connectivity());
        assert!(err.source().is_some());
    }

    #[test]
    fn row_not_found_is_not_translated_to_not_found() {
        // NotFound is reserved for lookups by id done by the repository itself
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = StoreError::not_found("KpIndex", 9988);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "KpIndex with id 9988 not found");
    }

    #[test]
    fn field_type_message() {
        let err = StoreError::field_type("KpIndex", "time_tag", "timestamp", "integer");
        assert_eq!(err.to_string(), "KpIndex.time_tag expects timestamp, got integer");
    }

    #[test]
    fn unknown_field_message() {
        let err = StoreError::unknown_field("KpIndex", "kp_idx");
        assert_eq!(err.to_string(), "KpIndex has no assignable field `kp_idx`");
    }
}
