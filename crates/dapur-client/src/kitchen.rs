use dapur_core::{default_catalog, Ingredient, KeyValueStore, Recipe, StorageError};

use crate::api::RecipeApi;
use crate::error::ClientError;
use crate::favorites::FavoritesStore;
use crate::selection::Selection;

/// Result of a generate request as seen by the user.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Nothing was selected, so no request was sent.
    Skipped,
    /// The recipe list was replaced with this many recipes.
    Loaded(usize),
    /// The request failed; the previous recipe list is still shown.
    Failed(ClientError),
}

/// Client-side session: what the user has picked, what is on screen, and
/// the persisted favorites.
pub struct Kitchen<A, S> {
    api: A,
    catalog: Vec<Ingredient>,
    selection: Selection,
    custom_input: String,
    loading: bool,
    recipes: Vec<Recipe>,
    favorites: FavoritesStore<S>,
}

impl<A: RecipeApi, S: KeyValueStore> Kitchen<A, S> {
    /// Create a session, loading favorites from `store`.
    pub fn new(api: A, store: S) -> Result<Self, StorageError> {
        Ok(Self {
            api,
            catalog: default_catalog(),
            selection: Selection::new(),
            custom_input: String::new(),
            loading: false,
            recipes: Vec::new(),
            favorites: FavoritesStore::load(store)?,
        })
    }

    pub fn catalog(&self) -> &[Ingredient] {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn favorites(&self) -> &[Recipe] {
        self.favorites.list()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn toggle_ingredient(&mut self, name: &str) -> bool {
        self.selection.toggle(name)
    }

    pub fn set_custom_input(&mut self, text: impl Into<String>) {
        self.custom_input = text.into();
    }

    /// Add the current custom input to the selection.
    /// The input field is cleared only when the entry was added.
    pub fn add_custom_ingredient(&mut self) -> bool {
        let added = self.selection.add_custom(&self.custom_input);
        if added {
            self.custom_input.clear();
        }
        added
    }

    /// Mark a request as in flight and return the ingredients to send.
    /// Returns None, changing nothing, when the selection is empty.
    pub fn start_generation(&mut self) -> Option<Vec<String>> {
        if self.selection.is_empty() {
            return None;
        }
        self.loading = true;
        Some(self.selection.as_slice().to_vec())
    }

    /// Settle an in-flight request.
    ///
    /// Loading is cleared and the selection reset whatever the result; the
    /// recipe list is replaced only on success.
    pub fn finish_generation(
        &mut self,
        result: Result<Vec<Recipe>, ClientError>,
    ) -> GenerateOutcome {
        self.loading = false;
        self.selection.clear();

        match result {
            Ok(recipes) => {
                let count = recipes.len();
                self.recipes = recipes;
                tracing::info!("Loaded {} recipes", count);
                GenerateOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!("Error calling recipe API: {}", e);
                GenerateOutcome::Failed(e)
            }
        }
    }

    /// Send the current selection to the proxy and settle the result.
    pub async fn generate(&mut self) -> GenerateOutcome {
        let Some(ingredients) = self.start_generation() else {
            return GenerateOutcome::Skipped;
        };

        let result = self.api.generate_recipes(&ingredients).await;
        self.finish_generation(result)
    }

    pub fn is_favorite(&self, recipe: &Recipe) -> bool {
        self.favorites.is_favorite(&recipe.title)
    }

    /// Toggle the favorite state of a recipe and persist it.
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> Result<bool, ClientError> {
        Ok(self.favorites.toggle(recipe)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dapur_core::{Difficulty, InMemoryKeyValueStore};
    use std::sync::{Arc, Mutex};

    enum Reply {
        Recipes(Vec<Recipe>),
        Status(u16, &'static str),
    }

    /// Records every request and answers with a fixed reply.
    struct FakeApi {
        reply: Reply,
        requests: Mutex<Vec<Vec<String>>>,
    }

    impl FakeApi {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Vec<String>> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl RecipeApi for Arc<FakeApi> {
        async fn generate_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>, ClientError> {
            self.requests.lock().unwrap().push(ingredients.to_vec());
            match &self.reply {
                Reply::Recipes(list) => Ok(list.clone()),
                Reply::Status(status, message) => Err(ClientError::Status {
                    status: *status,
                    message: message.to_string(),
                }),
            }
        }
    }

    fn chicken_rice_bowl() -> Recipe {
        Recipe {
            title: "Chicken Rice Bowl".to_string(),
            ingredients: vec!["Chicken".to_string(), "Rice".to_string()],
            steps: vec![
                "Cook rice".to_string(),
                "Cook chicken".to_string(),
                "Combine".to_string(),
            ],
            nutrition: "balanced".to_string(),
            difficulty: Difficulty::Easy,
            time: "20 mins".to_string(),
            cost: "RM 5".to_string(),
        }
    }

    fn kitchen(reply: Reply) -> (Kitchen<Arc<FakeApi>, Arc<InMemoryKeyValueStore>>, Arc<FakeApi>) {
        let api = Arc::new(FakeApi::new(reply));
        let kitchen = Kitchen::new(api.clone(), Arc::new(InMemoryKeyValueStore::new())).unwrap();
        (kitchen, api)
    }

    #[tokio::test]
    async fn test_generate_success_scenario() {
        let (mut kitchen, api) = kitchen(Reply::Recipes(vec![chicken_rice_bowl()]));
        kitchen.toggle_ingredient("Chicken");
        kitchen.toggle_ingredient("Rice");

        let outcome = kitchen.generate().await;

        assert!(matches!(outcome, GenerateOutcome::Loaded(1)));
        assert_eq!(api.requests(), vec![vec!["Chicken".to_string(), "Rice".to_string()]]);
        assert_eq!(kitchen.recipes(), [chicken_rice_bowl()]);
        assert!(!kitchen.is_loading());
        assert!(kitchen.selection().is_empty());
    }

    #[tokio::test]
    async fn test_generate_with_empty_selection_is_noop() {
        let (mut kitchen, api) = kitchen(Reply::Recipes(vec![chicken_rice_bowl()]));

        let outcome = kitchen.generate().await;

        assert!(matches!(outcome, GenerateOutcome::Skipped));
        assert!(api.requests().is_empty());
        assert!(kitchen.recipes().is_empty());
        assert!(!kitchen.is_loading());
    }

    #[tokio::test]
    async fn test_generate_failure_keeps_recipes_and_favorites() {
        let (mut kitchen, _api) = kitchen(Reply::Status(500, "Recipe generation failed"));
        kitchen.finish_generation(Ok(vec![chicken_rice_bowl()]));
        kitchen.toggle_favorite(&chicken_rice_bowl()).unwrap();

        kitchen.toggle_ingredient("Tofu");
        let outcome = kitchen.generate().await;

        match outcome {
            GenerateOutcome::Failed(ClientError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!kitchen.is_loading());
        assert!(kitchen.selection().is_empty());
        assert_eq!(kitchen.recipes(), [chicken_rice_bowl()]);
        assert_eq!(kitchen.favorites(), [chicken_rice_bowl()]);
    }

    #[test]
    fn test_start_generation_sets_loading() {
        let (mut kitchen, _api) = kitchen(Reply::Recipes(Vec::new()));
        assert_eq!(kitchen.start_generation(), None);
        assert!(!kitchen.is_loading());

        kitchen.toggle_ingredient("Eggs");
        assert_eq!(kitchen.start_generation(), Some(vec!["Eggs".to_string()]));
        assert!(kitchen.is_loading());

        kitchen.finish_generation(Ok(Vec::new()));
        assert!(!kitchen.is_loading());
        assert!(kitchen.recipes().is_empty());
    }

    #[test]
    fn test_add_custom_ingredient_clears_input() {
        let (mut kitchen, _api) = kitchen(Reply::Recipes(Vec::new()));

        kitchen.set_custom_input("  Belacan ");
        assert!(kitchen.add_custom_ingredient());
        assert_eq!(kitchen.custom_input(), "");
        assert_eq!(kitchen.selection().as_slice(), ["Belacan"]);

        // Rejected entries stay in the input field.
        kitchen.set_custom_input("Belacan");
        assert!(!kitchen.add_custom_ingredient());
        assert_eq!(kitchen.custom_input(), "Belacan");
    }

    #[test]
    fn test_toggle_favorite() {
        let (mut kitchen, _api) = kitchen(Reply::Recipes(Vec::new()));
        let recipe = chicken_rice_bowl();

        assert!(!kitchen.is_favorite(&recipe));
        assert!(kitchen.toggle_favorite(&recipe).unwrap());
        assert!(kitchen.is_favorite(&recipe));
        assert!(!kitchen.toggle_favorite(&recipe).unwrap());
        assert!(kitchen.favorites().is_empty());
    }
}
