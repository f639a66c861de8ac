//! HTTP Handlers

use crate::application::config::CardsConfig;
use crate::application::distribute_cards::DistributeCardsUseCase;
use crate::domain::repository::CardRepository;
use crate::error::CardsResult;
use crate::presentation::dto::{DistributeRequest, DistributeResponse, HealthResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::AppError;
use std::sync::Arc;

/// Shared state for card handlers
///
/// Read-only collaborators only; no per-request data lives here.
#[derive(Clone)]
pub struct CardsAppState<R>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CardsConfig>,
}

/// POST /api/distribute-cards
pub async fn distribute_cards<R>(
    State(state): State<CardsAppState<R>>,
    payload: Result<Json<DistributeRequest>, JsonRejection>,
) -> CardsResult<Json<DistributeResponse>>
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    // An unreadable body has no numberOfPeople field
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable distribute request body");
            DistributeRequest::default()
        }
    };

    let number_of_people = req.number_of_people()?;

    let use_case = DistributeCardsUseCase::new(state.repo.clone(), state.config.clone());

    let distribution = use_case.execute(number_of_people).await?;

    Ok(Json(DistributeResponse::try_from(distribution)?))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::not_found()
}

/// Fallback for known routes called with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
