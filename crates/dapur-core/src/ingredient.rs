use serde::{Deserialize, Serialize};

/// An ingredient the user can pick before asking for recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Name sent to the recipe generator (e.g., "Chicken")
    pub name: String,
    /// Display glyph shown next to the name
    pub icon: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_creation() {
        let ingredient = Ingredient::new("Tofu", "🥟");

        assert_eq!(ingredient.name, "Tofu");
        assert_eq!(ingredient.icon, "🥟");
    }
}
