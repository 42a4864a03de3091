//! HTTP client for the POS admin REST backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    query::ListQuery,
    session::Session,
    types::{
        AdminInput, AdminUser, Category, CategoryInput, Deleted, Employee, EmployeeInput,
        LoginResponse, Page, Product, ProductInput, Receivable, Response, StockActivity,
        Transaction, UserActivity,
    },
    Error,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the admin backend.
///
/// Every request carries the session's bearer token. Requests time out after
/// 30 seconds so a hung backend surfaces as a retryable error instead of an
/// indefinite loading state.
pub struct Client {
    base_api_url: String,
    session: Session,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the given backend URL with an injected session.
    pub fn new(base_url: &str, session: Session) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Network(e.to_string())
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            session,
            http,
        })
    }

    /// Authenticates against `POST /login` and returns the token plus user
    /// record. Storing the token is the caller's concern.
    pub async fn login(base_url: &str, email: &str, password: &str) -> Result<LoginResponse, Error> {
        let url = format!("{}/login", base_url.trim_end_matches('/'));
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        let resp = http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("login request failed: {}", e);
                Error::Network(e.to_string())
            })?;
        read_body::<LoginResponse>(resp).await
    }

    /// The user record attached to the session, when the session carries one.
    pub fn current_user(&self) -> Option<&AdminUser> {
        self.session.user.as_ref()
    }

    fn get_url(&self, path: &str, query: Option<&ListQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::Network(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, path: &str, query: &ListQuery) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, Some(query))?;
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.session.token)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("failed to get {}: {}", path, e);
                Error::Network(e.to_string())
            })?;
        read_body(resp).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None)?;
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.session.token)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("failed to post {}: {}", path, e);
                Error::Network(e.to_string())
            })?;
        read_body(resp).await
    }

    // -- Paginated lists --

    pub async fn list_products(&self, query: &ListQuery) -> Result<Page<Product>, Error> {
        self.get("/products", query).await
    }

    pub async fn list_categories(&self, query: &ListQuery) -> Result<Page<Category>, Error> {
        self.get("/categories", query).await
    }

    pub async fn list_admins(&self, query: &ListQuery) -> Result<Page<AdminUser>, Error> {
        self.get("/admins", query).await
    }

    pub async fn list_employees(&self, query: &ListQuery) -> Result<Page<Employee>, Error> {
        self.get("/employees", query).await
    }

    pub async fn list_transactions(&self, query: &ListQuery) -> Result<Page<Transaction>, Error> {
        self.get("/transactions", query).await
    }

    pub async fn list_receivables(&self, query: &ListQuery) -> Result<Page<Receivable>, Error> {
        self.get("/receivables", query).await
    }

    pub async fn list_stock_activity(
        &self,
        query: &ListQuery,
    ) -> Result<Page<StockActivity>, Error> {
        self.get("/stock-activities", query).await
    }

    pub async fn list_user_activity(&self, query: &ListQuery) -> Result<Page<UserActivity>, Error> {
        self.get("/user-activities", query).await
    }

    // -- Mutations --

    pub async fn create_product(&self, input: &ProductInput) -> Result<Response<Product>, Error> {
        self.post("/products/store", input).await
    }

    pub async fn update_product(
        &self,
        id: i64,
        input: &ProductInput,
    ) -> Result<Response<Product>, Error> {
        self.post(&format!("/products/update/{id}"), input).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<Deleted, Error> {
        self.post(&format!("/products/delete/{id}"), &serde_json::json!({}))
            .await
    }

    pub async fn create_category(
        &self,
        input: &CategoryInput,
    ) -> Result<Response<Category>, Error> {
        self.post("/categories/store", input).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: &CategoryInput,
    ) -> Result<Response<Category>, Error> {
        self.post(&format!("/categories/update/{id}"), input).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<Deleted, Error> {
        self.post(&format!("/categories/delete/{id}"), &serde_json::json!({}))
            .await
    }

    pub async fn create_admin(&self, input: &AdminInput) -> Result<Response<AdminUser>, Error> {
        self.post("/admins/store", input).await
    }

    pub async fn update_admin(
        &self,
        id: i64,
        input: &AdminInput,
    ) -> Result<Response<AdminUser>, Error> {
        self.post(&format!("/admins/update/{id}"), input).await
    }

    pub async fn delete_admin(&self, id: i64) -> Result<Deleted, Error> {
        self.post(&format!("/admins/delete/{id}"), &serde_json::json!({}))
            .await
    }

    pub async fn create_employee(
        &self,
        input: &EmployeeInput,
    ) -> Result<Response<Employee>, Error> {
        self.post("/employees/store", input).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        input: &EmployeeInput,
    ) -> Result<Response<Employee>, Error> {
        self.post(&format!("/employees/update/{id}"), input).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<Deleted, Error> {
        self.post(&format!("/employees/delete/{id}"), &serde_json::json!({}))
            .await
    }
}

/// Checks the status, reads the body, and decodes the expected envelope.
async fn read_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("failed to read response body: {}", e);
        Error::Network(e.to_string())
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("request failed with status {}: {}", status, snippet);
        return Err(Error::from_status(status.as_u16(), &body));
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        let snippet = truncate_body(&body);
        tracing::error!("failed to decode response: {} | body: {}", e, snippet);
        Error::Decode(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
