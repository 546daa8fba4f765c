use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::Validator;

/// Body of `POST /api/generate-recipes`.
///
/// `ingredients` is optional on the wire so that a missing or `null` field
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients: Some(ingredients),
        }
    }

    /// Return the ingredient list if it is present and non-empty.
    pub fn validated(&self) -> Result<&[String], ValidationError> {
        Validator::validate_ingredients(self.ingredients.as_deref())
    }
}
