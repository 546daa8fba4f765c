use crate::ingredient::Ingredient;

const CATALOG: &[(&str, &str)] = &[
    ("Chicken", "🍗"),
    ("Beef", "🥩"),
    ("Pork", "🐖"),
    ("Eggs", "🥚"),
    ("Tomato", "🍅"),
    ("Potato", "🥔"),
    ("Carrot", "🥕"),
    ("Onion", "🧅"),
    ("Garlic", "🧄"),
    ("Rice", "🍚"),
    ("Noodles", "🍜"),
    ("Bell Pepper", "🫑"),
    ("Mushroom", "🍄"),
    ("Spinach", "🥬"),
    ("Cheese", "🧀"),
    ("Milk", "🥛"),
    ("Bread", "🍞"),
    ("Tofu", "🥟"),
    ("Fish", "🐟"),
];

/// The predefined ingredients offered in the selection panel, in display order.
pub fn default_catalog() -> Vec<Ingredient> {
    CATALOG
        .iter()
        .map(|(name, icon)| Ingredient::new(*name, *icon))
        .collect()
}
