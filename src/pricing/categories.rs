/// Shopping-list category for an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Meat,
    Vegetables,
    Fruit,
    Cupboard,
    Dairy,
    Other,
}

impl Category {
    /// Display order for rendered lists: alphabetical by label.
    pub const DISPLAY_ORDER: [Category; 6] = [
        Category::Cupboard,
        Category::Dairy,
        Category::Fruit,
        Category::Meat,
        Category::Other,
        Category::Vegetables,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Meat => "Meat",
            Category::Vegetables => "Vegetables",
            Category::Fruit => "Fruit",
            Category::Cupboard => "Cupboard",
            Category::Dairy => "Dairy",
            Category::Other => "Other",
        }
    }
}

/// Ordered classification rules, evaluated first-match-wins.
///
/// The order is part of the contract: "pepper" sits in both the vegetables
/// and cupboard keyword lists and resolves to Vegetables because that rule
/// comes first. Substring matching is a deliberate heuristic — "salt"
/// matches "salted almonds" too — pinned by tests, not corrected.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Meat,
        &["chicken", "beef", "mince", "steak", "pork", "salmon", "turkey"],
    ),
    (
        Category::Vegetables,
        &[
            "carrot", "broccoli", "spinach", "pepper", "lettuce", "onion", "potato", "tomato",
        ],
    ),
    (
        Category::Fruit,
        &["banana", "apple", "orange", "avocado", "berries"],
    ),
    (
        Category::Cupboard,
        &[
            "rice", "pasta", "stock", "oats", "almond", "oil", "spice", "salt", "pepper",
        ],
    ),
    (
        Category::Dairy,
        &["milk", "cheese", "yogurt", "butter", "egg"],
    ),
];

/// Assign a category by case-insensitive keyword containment.
pub fn categorize(name: &str) -> Category {
    let name = name.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }
    Category::Other
}
