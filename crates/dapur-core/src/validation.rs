use crate::error::ValidationError;

/// Validator for recipe requests.
pub struct Validator;

impl Validator {
    /// Validate the ingredient list of a recipe request.
    /// Must be present and contain at least one entry; entries themselves are
    /// passed through to the model as given.
    pub fn validate_ingredients(
        ingredients: Option<&[String]>,
    ) -> Result<&[String], ValidationError> {
        match ingredients {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(ValidationError::MissingIngredients),
        }
    }
}
