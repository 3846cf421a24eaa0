use std::{error::Error, fmt::Debug};

use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::{utils::error_fmt_chain, validation::ValidationErrors};

// Errors shared by every read / write against the entity tables
#[derive(Error)]
pub enum RecordError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    QueryError(#[source] diesel::result::Error),
    #[error("Record violates a foreign key constraint: {0}")]
    ForeignKeyViolation(String),
    #[error("Record does not exist")]
    NotFound,
    #[error("Record changes failed validation")]
    Invalid(ValidationErrors)
}

impl From<diesel::result::Error> for RecordError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RecordError::ForeignKeyViolation(info.message().to_string())
            },
            _ => RecordError::QueryError(e)
        }
    }
}

impl Debug for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
