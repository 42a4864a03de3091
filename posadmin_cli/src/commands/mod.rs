pub mod activity_log;
pub mod admins;
pub mod browse;
pub mod categories;
pub mod employees;
pub mod login;
pub mod products;
pub mod receivables;
pub mod stock_log;
pub mod transactions;

use clap::Args;
use posadmin_lib::types::Page;
use posadmin_lib::ListQuery;

/// Pagination and search flags shared by every list screen.
#[derive(Args, Clone)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Search text
    #[arg(long)]
    pub search: Option<String>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<i64>,
}

impl ListArgs {
    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::default().with_page(self.page);
        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        if let Some(per_page) = self.per_page {
            query = query.with_per_page(per_page);
        }
        query
    }
}

/// Prints the result-count notice for search-driven fetches. Plain
/// pagination stays silent.
pub fn search_notice<T>(args: &ListArgs, page: &Page<T>) {
    if args.search.is_some() {
        if page.total == 0 {
            eprintln!("no results");
        } else {
            eprintln!("{} results found", page.total);
        }
    }
}
