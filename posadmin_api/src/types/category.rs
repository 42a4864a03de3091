use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Number of products filed under this category.
    pub products_count: Option<i64>,
}

/// Body for category store/update requests.
#[derive(Serialize, Clone, Debug, Default)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}
