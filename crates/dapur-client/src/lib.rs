//! Dapur Client - Ingredient selection, recipe requests, and favorites.
//!
//! The session state lives in [`Kitchen`]; network access and persistence
//! are injected through [`RecipeApi`] and [`dapur_core::KeyValueStore`].

pub mod api;
pub mod command;
pub mod error;
pub mod favorites;
pub mod kitchen;
pub mod render;
pub mod selection;

pub use api::{HttpRecipeApi, RecipeApi};
pub use command::Command;
pub use error::ClientError;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use kitchen::{GenerateOutcome, Kitchen};
pub use selection::Selection;
