use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the stock movement log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StockActivity {
    pub id: i64,

    pub product_name: String,

    pub direction: StockDirection,

    /// Units moved; always positive, `direction` carries the sign.
    pub quantity: i64,

    /// Free-form reason recorded by the backend ("sale", "restock", ...).
    pub note: Option<String>,

    pub actor_name: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StockDirection {
    In,
    Out,
}

impl std::fmt::Display for StockDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StockDirection::In => "in",
                StockDirection::Out => "out",
            }
        )
    }
}

/// One entry in the user activity log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserActivity {
    pub id: i64,

    pub user_name: String,

    pub action: String,

    pub created_at: DateTime<Utc>,
}
