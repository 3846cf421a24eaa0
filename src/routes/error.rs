use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{db_interaction::RecordError, utils::error_fmt_chain, validation::ValidationErrors};

/// Errors returned by every handler. Validation failures answer with the
/// field map; everything else answers with `{"error": <message>}`.
#[derive(Error)]
pub enum ApiError{
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("{0}")]
    Conflict(String),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Failed due to internal server error")]
    UnexpectedError(#[from] anyhow::Error)
}

impl ApiError {
    // `entity` is the capitalised entity name used in messages
    pub fn from_record(e: RecordError, entity: &'static str) -> Self {
        match e {
            RecordError::NotFound => ApiError::NotFound(entity),
            RecordError::Invalid(errors) => ApiError::Validation(errors),
            RecordError::ForeignKeyViolation(_) => {
                ApiError::Conflict(format!("{} is still referenced by other records", entity))
            },
            e => ApiError::UnexpectedError(e.into())
        }
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            ApiError::Validation(errors) => HttpResponse::build(self.status_code()).json(errors),
            _ => HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
        }
    }
}

// Bodies that are not JSON at all never reach validation
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            ApiError::MalformedBody(err.to_string()).into()
        })
}

// Path ids that do not parse as integers name no record
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| {
            ApiError::NotFound("Resource").into()
        })
}

pub fn message(text: &str) -> serde_json::Value {
    json!({"message": text})
}
