use dapur_core::{KeyValueStore, Recipe, StorageError};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favoriteRecipes";

/// Persisted list of favorite recipes, keyed by title.
///
/// Every mutation is written through to the backing store before the
/// in-memory list changes, so a failed write leaves both sides untouched.
pub struct FavoritesStore<S> {
    store: S,
    favorites: Vec<Recipe>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from the store.
    ///
    /// A missing entry is initialized to an empty list (`[]`). An entry that
    /// does not parse is replaced by an empty list as well.
    pub fn load(store: S) -> Result<Self, StorageError> {
        let favorites = match store.get(FAVORITES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("Discarding unreadable favorites ({}): {:?}", e, raw);
                    store.set(FAVORITES_KEY, "[]")?;
                    Vec::new()
                }
            },
            None => {
                store.set(FAVORITES_KEY, "[]")?;
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} favorites", favorites.len());
        Ok(Self { store, favorites })
    }

    /// Add the recipe if no favorite has its title, remove that favorite
    /// otherwise. Returns whether the recipe is a favorite afterwards.
    pub fn toggle(&mut self, recipe: &Recipe) -> Result<bool, StorageError> {
        let mut next = self.favorites.clone();
        let favorited = if next.iter().any(|f| f.same_title(recipe)) {
            next.retain(|f| !f.same_title(recipe));
            false
        } else {
            next.push(recipe.clone());
            true
        };

        self.save(&next)?;
        self.favorites = next;
        Ok(favorited)
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| f.title == title)
    }

    pub fn list(&self) -> &[Recipe] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn save(&self, favorites: &[Recipe]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}
