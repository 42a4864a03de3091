use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as listed on the inventory screens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i64,

    pub name: String,

    pub barcode: Option<String>,

    pub category_id: i64,

    /// Denormalized category name, sent by the backend for display.
    pub category_name: Option<String>,

    pub purchase_price: f64,

    pub selling_price: f64,

    pub stock: i64,

    /// Sales unit, e.g. "pcs" or "kg".
    pub unit: String,

    pub image_url: Option<String>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /products/store` and `POST /products/update/<id>`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ProductInput {
    pub name: String,
    pub barcode: Option<String>,
    pub category_id: i64,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub stock: i64,
    pub unit: String,
}
