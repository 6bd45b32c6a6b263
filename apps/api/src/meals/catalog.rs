//! Ingredient Catalog — the fixed, categorized list of ingredients a meal idea may use.
//!
//! Order matters: categories and items are rendered exactly as stored so the
//! system prompt is byte-for-byte reproducible.

use serde::Serialize;

const INGREDIENTS_HEADER: &str = "The available ingredients are:";

/// One named group of ingredients, e.g. `proteins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

/// Ordered mapping category → ingredients. Built once at startup, never mutated.
/// Duplicates across categories are allowed and kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientCatalog {
    pub categories: Vec<Category>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category after all existing ones.
    pub fn with_category(mut self, name: &str, items: &[&str]) -> Self {
        self.categories.push(Category {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Renders the catalog for embedding in the system prompt:
    ///
    /// ```text
    /// The available ingredients are:
    /// Proteins: Beef, Bison, ...
    /// Healthy_fats: Almonds, ...
    /// ```
    ///
    /// followed by a trailing newline.
    pub fn format(&self) -> String {
        let lines = self
            .categories
            .iter()
            .map(|c| format!("{}: {}", capitalize(&c.name), c.items.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{INGREDIENTS_HEADER}\n{lines}\n")
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The catalog served by the application.
pub fn default_catalog() -> IngredientCatalog {
    IngredientCatalog::new()
        .with_category(
            "proteins",
            &[
                "Beef",
                "Bison",
                "Chicken",
                "Turkey",
                "Duck",
                "Pork",
                "Seafood",
                "Whole Milk",
                "Cheese",
                "Eggs",
                "Beans",
                "Chia Seeds",
                "Lentils",
                "Edamame",
                "Quinoa",
                "Greek Yogurt",
            ],
        )
        .with_category(
            "healthy_fats",
            &[
                "Almonds",
                "Avocado",
                "Avocado Oil",
                "Brazil Nuts",
                "Cashew",
                "Chia Seeds",
                "Coconut Oil",
                "Flax Seeds",
                "Ghee",
                "Hazelnuts",
                "Hemp Seeds",
                "Macadamia",
                "Macadamia Oil",
                "Nut Butters",
                "Pecans",
                "Pine Nuts",
                "Pistachios",
                "Pumpkin Seeds",
                "Sesame Seeds",
                "Sunflower Seeds",
                "Tahini",
                "Walnuts",
                "Walnut Oil",
                "Peanut Butter",
                "Almond Butter",
            ],
        )
        .with_category(
            "carbohydrates",
            &[
                "Apples",
                "Artichokes",
                "Asparagus",
                "Bananas",
                "Beets",
                "Bell Peppers",
                "Blackberries",
                "Blueberries",
                "Bok choy",
                "Broccoli",
                "Brussel Sprouts",
                "Cabbage",
                "Cantaloupe",
                "Carrots",
                "Cauliflower",
                "Cherries",
                "Cranberries",
                "Figs",
                "Grapefruit",
                "Grapes",
                "Honeydew",
                "Kiwi",
                "Mangos",
                "Oranges",
                "Parsnips",
                "Peaches",
                "Pears",
                "Peas",
                "Plantain",
                "Potatoes",
                "Pumpkin",
                "Radishes",
                "Snow Peas",
                "Squash",
                "Sweet Potatoes",
                "Turnip Greens",
                "Turnips",
                "Yams",
                "Zucchini",
                "Quinoa",
                "Brown Rice",
                "Wild Rice",
                "Oats",
                "Barley",
                "Millet",
                "Buckwheat (whole groats)",
                "Farro",
                "Rice Cakes",
            ],
        )
}
