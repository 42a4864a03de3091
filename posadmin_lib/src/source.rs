//! The data-source seam the list controller fetches through.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use posadmin_api::types::Page;
use posadmin_api::Error;

/// Something that can answer "give me page `n` filtered by `search`".
///
/// One implementation exists per screen; tests substitute scripted sources.
#[async_trait]
pub trait PageSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    async fn fetch_page(&self, page: i64, search: &str) -> Result<Page<Self::Item>, Error>;
}

/// Adapter turning a closure into a [`PageSource`]. Built with [`source_fn`].
pub struct FnSource<F> {
    f: F,
}

/// Wraps `f(page, search)` as a [`PageSource`].
pub fn source_fn<F, Fut, T>(f: F) -> FnSource<F>
where
    F: Fn(i64, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Page<T>, Error>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    FnSource { f }
}

#[async_trait]
impl<F, Fut, T> PageSource for FnSource<F>
where
    F: Fn(i64, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Page<T>, Error>> + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    async fn fetch_page(&self, page: i64, search: &str) -> Result<Page<T>, Error> {
        (self.f)(page, search.to_string()).await
    }
}

/// One source constructor per screen, each binding a `Client` list method.
pub mod sources {
    use super::*;
    use posadmin_api::types::{
        AdminUser, Category, Employee, Product, Receivable, StockActivity, Transaction,
        UserActivity,
    };
    use posadmin_api::{Client, ListQuery};

    fn query(page: i64, search: &str) -> ListQuery {
        ListQuery::default().with_page(page).with_search(search)
    }

    pub fn products(client: Arc<Client>) -> impl PageSource<Item = Product> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_products(&query(page, &search)).await }
        })
    }

    pub fn categories(client: Arc<Client>) -> impl PageSource<Item = Category> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_categories(&query(page, &search)).await }
        })
    }

    pub fn admins(client: Arc<Client>) -> impl PageSource<Item = AdminUser> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_admins(&query(page, &search)).await }
        })
    }

    pub fn employees(client: Arc<Client>) -> impl PageSource<Item = Employee> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_employees(&query(page, &search)).await }
        })
    }

    pub fn transactions(client: Arc<Client>) -> impl PageSource<Item = Transaction> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_transactions(&query(page, &search)).await }
        })
    }

    pub fn receivables(client: Arc<Client>) -> impl PageSource<Item = Receivable> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_receivables(&query(page, &search)).await }
        })
    }

    pub fn stock_activity(client: Arc<Client>) -> impl PageSource<Item = StockActivity> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_stock_activity(&query(page, &search)).await }
        })
    }

    pub fn user_activity(client: Arc<Client>) -> impl PageSource<Item = UserActivity> {
        source_fn(move |page, search| {
            let client = Arc::clone(&client);
            async move { client.list_user_activity(&query(page, &search)).await }
        })
    }
}
