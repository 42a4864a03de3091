use serde::{Deserialize, Serialize};

/// An administrator account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdminUser {
    pub id: i64,

    pub name: String,

    pub email: String,

    /// Role label, e.g. "owner" or "admin".
    pub role: String,
}

/// Body for admin store/update requests. `password` is only sent when set.
#[derive(Serialize, Clone, Debug, Default)]
pub struct AdminInput {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// An employee (cashier) record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Employee {
    pub id: i64,

    pub name: String,

    pub phone: Option<String>,

    pub address: Option<String>,

    pub position: Option<String>,
}

/// Body for employee store/update requests.
#[derive(Serialize, Clone, Debug, Default)]
pub struct EmployeeInput {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
}

/// Reply to `POST /login`: the bearer token plus the user it belongs to.
#[derive(Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminUser,
}
