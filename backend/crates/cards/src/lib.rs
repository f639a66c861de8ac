//! Card Distribution Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Cards, deck, dealing logic, card source trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Card source implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Distribution Model
//! - A complete 52-card deck is loaded per request and checked before use
//! - The deck is shuffled uniformly and dealt round-robin into N hands
//! - Bad input is a 422 validation error; an incomplete deck is a 500
//!   irregularity and nothing is dealt

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CardsConfig;
pub use error::{CardsError, CardsResult};
pub use infra::memory::InMemoryCardRepository;
pub use infra::postgres::PgCardRepository;
pub use presentation::router::{api_router, cards_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
