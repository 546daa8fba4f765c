//! Dapur Core - Domain models, storage traits, and validation.
//!
//! This crate holds the types shared by the recipe proxy server and the
//! client. It has no dependencies on other Dapur crates.

pub mod catalog;
pub mod error;
pub mod ingredient;
pub mod recipe;
pub mod request;
pub mod storage;
pub mod validation;

// Re-exports for convenience
pub use catalog::default_catalog;
pub use error::{StorageError, ValidationError};
pub use ingredient::Ingredient;
pub use recipe::{Difficulty, Recipe, RecipeBatch};
pub use request::RecipeRequest;
pub use storage::KeyValueStore;
pub use validation::Validator;

#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::InMemoryKeyValueStore;
