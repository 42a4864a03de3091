mod page;
pub use self::page::{Deleted, Page, Response};

mod product;
pub use self::product::{Product, ProductInput};

mod category;
pub use self::category::{Category, CategoryInput};

mod user;
pub use self::user::{AdminInput, AdminUser, Employee, EmployeeInput, LoginResponse};

mod transaction;
pub use self::transaction::{Receivable, ReceivableStatus, Transaction};

mod activity;
pub use self::activity::{StockActivity, StockDirection, UserActivity};
