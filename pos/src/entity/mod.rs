//! SeaORM entities
//!
//! Database models for the persistence layer. These are separate from the
//! domain entities in `domain::entities`; adapters convert between the two.

pub mod products;
