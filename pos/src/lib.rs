//! Hansang POS catalog service
//!
//! Product catalog backend for a Korean restaurant point-of-sale system.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.
//!
//! The application layer is the public boundary: wire a [`ProductService`]
//! to a [`ProductRepository`] implementation and call it directly. No
//! transport layer is bundled; embedding applications bring their own.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use adapters::{DatabaseCleaner, SqliteProductRepository};
pub use app::ProductService;
pub use config::Config;
pub use domain::entities::{NewProduct, Product, ProductId};
pub use domain::ports::ProductRepository;
pub use error::DomainError;
