//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Card, Deck, Hand, Distribution)
//! - Domain value objects (Suit, Rank, NumberOfPeople)
//! - Domain services (dealing logic)
//! - Repository traits (card source interface)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
