//! Cards Router

use crate::application::config::CardsConfig;
use crate::domain::repository::CardRepository;
use crate::presentation::handlers::{self, CardsAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the cards router for any card source
pub fn cards_router<R>(repo: R, config: CardsConfig) -> Router
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    let state = CardsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/distribute-cards",
            post(handlers::distribute_cards::<R>),
        )
        .route("/health", get(handlers::health))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}

/// Full API surface: cards routes under `/api`, JSON 404 for anything else
pub fn api_router<R>(repo: R, config: CardsConfig) -> Router
where
    R: CardRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", cards_router(repo, config))
        .fallback(handlers::not_found)
}
