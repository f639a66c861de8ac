//! Card Distribution Error Types
//!
//! This module provides the distribution error taxonomy and its
//! integration with the unified `kernel::error::AppError` system.

use crate::domain::entities::{DealError, DeckError, HandAllocationError};
use crate::domain::value_objects::{NumberOfPeople, NumberOfPeopleError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Label of the `error` field for irregularity responses
pub const IRREGULARITY_TITLE: &str = "Irregularity occurred";

/// Cards-specific result type alias
pub type CardsResult<T> = Result<T, CardsError>;

/// Distribution error variants
///
/// Callers branch on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum CardsError {
    /// Caller supplied an unusable participant count
    #[error("{0}")]
    Validation(#[from] NumberOfPeopleError),

    /// Card source did not yield a complete deck
    #[error("Irregularity occurred: {0}")]
    Irregularity(#[from] DeckError),

    /// Stored card row has an unknown suit or rank code
    #[error("Invalid card record: {suit}-{rank}")]
    InvalidCardRecord { suit: String, rank: String },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CardsError::Irregularity(_)
            | CardsError::InvalidCardRecord { .. }
            | CardsError::Database(_)
            | CardsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CardsError::Validation(_) => ErrorKind::UnprocessableEntity,
            CardsError::Irregularity(_)
            | CardsError::InvalidCardRecord { .. }
            | CardsError::Database(_)
            | CardsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this is a deck integrity fault
    pub fn is_irregularity(&self) -> bool {
        matches!(self, CardsError::Irregularity(_))
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CardsError::Validation(e) => AppError::unprocessable(NumberOfPeople::FIELD, e.to_string()),
            CardsError::Irregularity(_) => AppError::new(self.kind())
                .with_title(IRREGULARITY_TITLE)
                .with_message(self.to_string()),
            _ => AppError::new(self.kind()).with_message(self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CardsError::Irregularity(DeckError::Incomplete { len, distinct }) => {
                tracing::error!(len, distinct, "Deck irregularity, distribution aborted");
            }
            CardsError::InvalidCardRecord { suit, rank } => {
                tracing::error!(suit = %suit, rank = %rank, "Invalid card record");
            }
            CardsError::Database(e) => {
                tracing::error!(error = %e, "Cards database error");
            }
            CardsError::Internal(msg) => {
                tracing::error!(message = %msg, "Cards internal error");
            }
            CardsError::Validation(e) => {
                tracing::debug!(error = %e, "Distribution request rejected");
            }
        }
    }
}

impl From<HandAllocationError> for CardsError {
    fn from(err: HandAllocationError) -> Self {
        CardsError::Internal(err.to_string())
    }
}

impl From<DealError> for CardsError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::Deck(e) => e.into(),
            DealError::Allocation(e) => e.into(),
        }
    }
}

impl From<CardsError> for AppError {
    fn from(err: CardsError) -> Self {
        let app_error = err.to_app_error();
        match err {
            CardsError::Database(e) => app_error.with_source(e),
            _ => app_error,
        }
    }
}

impl IntoResponse for CardsError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
