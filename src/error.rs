use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// An error raised by a service operation
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The entity targeted by the operation does not exist
    #[error("{0}")]
    NotFound(String),
    /// The operation would break a uniqueness, role or reference rule
    #[error("{0}")]
    Conflict(String),
    /// The input is malformed
    #[error("{0}")]
    Validation(String),
    /// Any other database failure
    #[error("Database error: {0}")]
    Db(DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{entity} with ID {id} not found"))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                Self::Conflict(format!("Duplicate value: {message}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Self::Conflict(format!("Referenced record is missing or still in use: {message}"))
            }
            _ => Self::Db(err),
        }
    }
}

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_db_errors_stay_db_errors() {
        let err: ServiceError = DbErr::Custom("boom".to_owned()).into();
        assert!(matches!(err, ServiceError::Db(DbErr::Custom(_))));
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(
            ServiceError::not_found("Section", 7).to_string(),
            "Section with ID 7 not found"
        );
    }
}
