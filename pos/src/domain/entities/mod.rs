//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM models in the `entity` module.

pub mod product;

pub use product::{NewProduct, Product, ProductId};
