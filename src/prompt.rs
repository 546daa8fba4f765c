use dapur_llm::ChatPrompt;

const SYSTEM_PROMPT: &str =
    "You are a helpful Malaysian chef that generates recipes in JSON format.";

const RESPONSE_SHAPE: &str = r#"{
  "recipes": [
    {
      "title": "Recipe name",
      "ingredients": ["list", "of", "ingredients"],
      "steps": ["step 1", "step 2"],
      "nutrition": "Nutrition info",
      "difficulty": "Easy/Medium/Hard",
      "time": "X mins",
      "cost": "RM X"
    }
  ]
}"#;

/// Build the generation prompt for a validated, non-empty ingredient list.
pub fn recipe_prompt(ingredients: &[String]) -> ChatPrompt {
    let user = format!(
        "Generate 3-5 Malaysian recipes using these ingredients: {}.\n\n\
         Requirements:\n\
         - Cheap and healthy\n\
         - Pick the best recipes for these ingredients; not all of them have to be used, \
         and other ingredients may be added if that makes a better dish\n\
         - Include cooking time and cost in RM\n\n\
         Respond with JSON only, in exactly this shape:\n{}",
        ingredients.join(", "),
        RESPONSE_SHAPE
    );

    ChatPrompt::new(SYSTEM_PROMPT, user)
}
