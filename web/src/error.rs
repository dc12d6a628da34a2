use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use domain::error::{DomainErrorKind, Error as DomainError};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

const DEFAULT_MESSAGE: &str = "Internal Server Error";

/// Body of every failed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// A failed request: the domain error that caused it plus the message reported
/// to the client for the endpoint that failed.
#[derive(Debug)]
pub struct Error {
    source: DomainError,
    message: &'static str,
}

impl Error {
    pub(crate) fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}: {}", self.message, self.source)
    }
}

// Validation and data access failures are reported identically to clients;
// only the server side log tells them apart.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self.source.error_kind {
            DomainErrorKind::Validation(validation_error_kind) => {
                warn!("{}: invalid topics parameter: {validation_error_kind:?}", self.message)
            }
            DomainErrorKind::Internal(internal_error_kind) => {
                error!(
                    "{}: {internal_error_kind:?} (source: {:?})",
                    self.message,
                    StdError::source(&self.source)
                )
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.message.to_string(),
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self {
            source: err.into(),
            message: DEFAULT_MESSAGE,
        }
    }
}

/// Attaches the endpoint specific failure message to a fallible result.
pub(crate) trait Context<T> {
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> Context<T> for core::result::Result<T, E>
where
    E: Into<DomainError>,
{
    fn context(self, message: &'static str) -> Result<T> {
        self.map_err(|err| Error::from(err).with_message(message))
    }
}
