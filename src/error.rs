//! src/error.rs

use crate::domain::ValidationError;
use crate::routes::{ApiResponse, ErrorCode};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type HsResult<T> = Result<T, Error>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Failure of a waiting list request.
///
/// `Display` is the message shown to the visitor; infrastructure causes are
/// only visible through `Debug`, which prints the whole chain.
#[derive(thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("This email is already registered in our waiting list.")]
    DuplicateEmail,
    #[error("Database error occurred")]
    DatabaseError(#[source] anyhow::Error),
    #[error("Failed to add to waiting list")]
    InsertionError(#[source] anyhow::Error),
    #[error("Failed to get statistics")]
    StatsError(#[source] anyhow::Error),
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ValidationError(ValidationError::MissingEmail) => ErrorCode::MissingEmail,
            Error::ValidationError(ValidationError::InvalidEmail(_)) => ErrorCode::InvalidEmail,
            Error::DuplicateEmail => ErrorCode::DuplicateEmail,
            Error::DatabaseError(_) => ErrorCode::DatabaseError,
            Error::InsertionError(_) => ErrorCode::InsertionError,
            Error::StatsError(_) => ErrorCode::StatsError,
            Error::UnexpectedError(_) => ErrorCode::InternalError,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationError(_) => StatusCode::BAD_REQUEST,
            Error::DuplicateEmail => StatusCode::CONFLICT,
            Error::DatabaseError(_)
            | Error::InsertionError(_)
            | Error::StatsError(_)
            | Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Waiting list request failed"
            );
        }
        HttpResponse::build(status).json(ApiResponse::<()>::failure(self))
    }
}
