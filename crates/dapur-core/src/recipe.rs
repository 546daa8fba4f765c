use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How hard a recipe is to cook.
///
/// Parsing is case-insensitive since model output is not consistent about
/// capitalisation; serialization always uses the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A generated recipe.
///
/// `title` is the identity used for favorites; two recipes with the same
/// title are treated as the same favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition: String,
    pub difficulty: Difficulty,
    pub time: String,
    pub cost: String,
}

impl Recipe {
    /// Whether `other` is the same favorite as this recipe.
    pub fn same_title(&self, other: &Recipe) -> bool {
        self.title == other.title
    }
}

/// The JSON object the model is asked to answer with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBatch {
    pub recipes: Vec<Recipe>,
}

impl RecipeBatch {
    /// Parse the model's raw text into a list of recipes.
    pub fn parse(text: &str) -> Result<Vec<Recipe>, serde_json::Error> {
        let batch: RecipeBatch = serde_json::from_str(text)?;
        Ok(batch.recipes)
    }
}
