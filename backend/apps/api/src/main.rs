//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    http,
    http::{Method, header},
    response::{IntoResponse, Response},
};
use cards::{CardsConfig, InMemoryCardRepository, PgCardRepository, api_router};
use kernel::error::app_error::AppError;
use sqlx::postgres::PgPoolOptions;
use std::any::Any;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,cards=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Distribution configuration
    let cards_config = match env::var("MAX_NUMBER_OF_PEOPLE") {
        Ok(max) => {
            let max = max
                .trim()
                .parse::<usize>()
                .context("MAX_NUMBER_OF_PEOPLE must be a positive integer")?;
            tracing::info!(max_number_of_people = max, "Participant cap enabled");
            CardsConfig::with_max_number_of_people(max)
        }
        Err(_) => CardsConfig::default(),
    };

    // Card source: PostgreSQL when configured, otherwise the built-in deck
    let api = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(value) => value
                    .trim()
                    .parse::<u32>()
                    .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
                Err(_) => DEFAULT_DATABASE_MAX_CONNECTIONS,
            };

            let pool = PgPoolOptions::new()
                .max_connections(max_connections)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let card_store = PgCardRepository::new(pool);

            // A short deck is reported per request; here it is only logged
            match card_store.count().await {
                Ok(52) => tracing::info!(cards = 52, "Card table ready"),
                Ok(count) => {
                    tracing::warn!(cards = count, "Card table does not hold a full deck")
                }
                Err(e) => tracing::warn!(error = %e, "Card count failed, continuing anyway"),
            }

            api_router(card_store, cards_config)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, serving the built-in 52-card deck");
            api_router(InMemoryCardRepository::standard(), cards_config)
        }
    };

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = api
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid BIND_ADDR: {bind_addr}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Turn a handler panic into the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::internal(detail).into_response()
}
