//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod cleaner;
pub mod db;
pub mod product_repo;


pub use cleaner::DatabaseCleaner;
pub use db::{connect, init_schema};
pub use product_repo::SqliteProductRepository;
