use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed point-of-sale transaction, as shown on the history screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: i64,

    pub invoice_number: String,

    pub cashier_name: String,

    /// Customer name, when the sale was attached to one.
    pub customer_name: Option<String>,

    pub total: f64,

    pub paid: f64,

    pub change: f64,

    pub created_at: DateTime<Utc>,
}

/// An outstanding receivable (unpaid remainder of a transaction).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Receivable {
    pub id: i64,

    pub invoice_number: String,

    pub customer_name: String,

    pub amount_due: f64,

    pub due_date: Option<DateTime<Utc>>,

    pub status: ReceivableStatus,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    Open,
    PartiallyPaid,
    Settled,
}

impl std::fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReceivableStatus::Open => "open",
                ReceivableStatus::PartiallyPaid => "partially paid",
                ReceivableStatus::Settled => "settled",
            }
        )
    }
}
